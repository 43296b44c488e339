//! Dock data repository for database operations.
//!
//! Provides the `DockRepository` for dock CRUD, filtered listings and the grouped
//! status and size counts behind dock statistics.

use chrono::Utc;
use entity::sea_orm_active_enums::{DockSize, DockStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::dock::{CreateDockParams, Dock, DockFilter, DockStats};

pub struct DockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DockRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new dock.
    ///
    /// # Returns
    /// - `Ok(Dock)` - The stored dock
    /// - `Err(DbErr)` - Database error, including a duplicate dock number
    pub async fn create(&self, params: CreateDockParams) -> Result<Dock, DbErr> {
        let now = Utc::now();
        let entity = entity::dock::ActiveModel {
            dock_number: ActiveValue::Set(params.dock_number),
            name: ActiveValue::Set(params.name),
            size: ActiveValue::Set(params.size),
            status: ActiveValue::Set(params.status),
            location: ActiveValue::Set(params.location),
            description: ActiveValue::Set(params.description),
            max_boat_length: ActiveValue::Set(params.max_boat_length),
            depth: ActiveValue::Set(params.depth),
            power_amperage: ActiveValue::Set(params.power_amperage),
            has_water: ActiveValue::Set(params.has_water),
            has_sewage: ActiveValue::Set(params.has_sewage),
            has_fuel: ActiveValue::Set(params.has_fuel),
            amenities: ActiveValue::Set(params.amenities),
            built_date: ActiveValue::Set(params.built_date),
            last_maintenance_date: ActiveValue::Set(params.last_maintenance_date),
            next_maintenance_date: ActiveValue::Set(params.next_maintenance_date),
            maintenance_interval: ActiveValue::Set(params.maintenance_interval),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dock::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dock>, DbErr> {
        let entity = entity::prelude::Dock::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dock::from_entity))
    }

    pub async fn find_by_dock_number(&self, dock_number: &str) -> Result<Option<Dock>, DbErr> {
        let entity = entity::prelude::Dock::find()
            .filter(entity::dock::Column::DockNumber.eq(dock_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Dock::from_entity))
    }

    /// Lists docks ordered by dock number.
    pub async fn get_all(&self, filter: DockFilter) -> Result<Vec<Dock>, DbErr> {
        let mut query = entity::prelude::Dock::find();
        if let Some(status) = filter.effective_status() {
            query = query.filter(entity::dock::Column::Status.eq(status));
        }
        if let Some(size) = filter.size {
            query = query.filter(entity::dock::Column::Size.eq(size));
        }

        let entities = query
            .order_by_asc(entity::dock::Column::DockNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dock::from_entity).collect())
    }

    /// Persists every mutable field of the dock and stamps `updated_at`.
    pub async fn update(&self, dock: Dock) -> Result<Dock, DbErr> {
        let entity = entity::dock::ActiveModel {
            id: ActiveValue::Unchanged(dock.id),
            dock_number: ActiveValue::Set(dock.dock_number),
            name: ActiveValue::Set(dock.name),
            size: ActiveValue::Set(dock.size),
            status: ActiveValue::Set(dock.status),
            location: ActiveValue::Set(dock.location),
            description: ActiveValue::Set(dock.description),
            max_boat_length: ActiveValue::Set(dock.max_boat_length),
            depth: ActiveValue::Set(dock.depth),
            power_amperage: ActiveValue::Set(dock.power_amperage),
            has_water: ActiveValue::Set(dock.has_water),
            has_sewage: ActiveValue::Set(dock.has_sewage),
            has_fuel: ActiveValue::Set(dock.has_fuel),
            amenities: ActiveValue::Set(dock.amenities),
            built_date: ActiveValue::Set(dock.built_date),
            last_maintenance_date: ActiveValue::Set(dock.last_maintenance_date),
            next_maintenance_date: ActiveValue::Set(dock.next_maintenance_date),
            maintenance_interval: ActiveValue::Set(dock.maintenance_interval),
            notes: ActiveValue::Set(dock.notes),
            created_at: ActiveValue::Unchanged(dock.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(Dock::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dock::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts docks in total and grouped by status and by size.
    pub async fn stats(&self) -> Result<DockStats, DbErr> {
        let total = entity::prelude::Dock::find().count(self.db).await?;

        let by_status = entity::prelude::Dock::find()
            .select_only()
            .column(entity::dock::Column::Status)
            .column_as(entity::dock::Column::Id.count(), "count")
            .group_by(entity::dock::Column::Status)
            .order_by_asc(entity::dock::Column::Status)
            .into_tuple::<(DockStatus, i64)>()
            .all(self.db)
            .await?;

        let by_size = entity::prelude::Dock::find()
            .select_only()
            .column(entity::dock::Column::Size)
            .column_as(entity::dock::Column::Id.count(), "count")
            .group_by(entity::dock::Column::Size)
            .order_by_asc(entity::dock::Column::Size)
            .into_tuple::<(DockSize, i64)>()
            .all(self.db)
            .await?;

        Ok(DockStats {
            total,
            by_status: by_status
                .into_iter()
                .map(|(status, count)| (status, count as u64))
                .collect(),
            by_size: by_size
                .into_iter()
                .map(|(size, count)| (size, count as u64))
                .collect(),
        })
    }
}
