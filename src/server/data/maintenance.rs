//! Maintenance record data repository for database operations.
//!
//! Provides CRUD plus the scheduling queries behind the upcoming and overdue
//! listings, statistics and cost prediction. Time-relative queries take `now` from
//! the caller.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::maintenance::{
    CreateMaintenanceRecordParams, MaintenanceFilter, MaintenanceRecord, MaintenanceStats,
};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateMaintenanceRecordParams,
    ) -> Result<MaintenanceRecord, DbErr> {
        let now = Utc::now();
        let entity = entity::maintenance_record::ActiveModel {
            asset_id: ActiveValue::Set(params.asset_id),
            dock_id: ActiveValue::Set(params.dock_id),
            maintenance_type: ActiveValue::Set(params.maintenance_type),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            completed_date: ActiveValue::Set(None),
            assigned_to: ActiveValue::Set(params.assigned_to),
            estimated_cost: ActiveValue::Set(params.estimated_cost),
            actual_cost: ActiveValue::Set(None),
            work_performed: ActiveValue::Set(None),
            parts_replaced: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            labor_hours: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MaintenanceRecord::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MaintenanceRecord>, DbErr> {
        let entity = entity::prelude::MaintenanceRecord::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MaintenanceRecord::from_entity))
    }

    /// Lists records by scheduled date, latest first.
    pub async fn get_all(&self, filter: MaintenanceFilter) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let mut query = entity::prelude::MaintenanceRecord::find();
        if let Some(asset_id) = filter.asset_id {
            query = query.filter(entity::maintenance_record::Column::AssetId.eq(asset_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::maintenance_record::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::maintenance_record::Column::ScheduledDate)
            .order_by_desc(entity::maintenance_record::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MaintenanceRecord::from_entity).collect())
    }

    /// Scheduled records due after `now`, soonest first.
    pub async fn get_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let entities = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .filter(entity::maintenance_record::Column::ScheduledDate.gt(now))
            .order_by_asc(entity::maintenance_record::Column::ScheduledDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MaintenanceRecord::from_entity).collect())
    }

    /// Scheduled records whose date has passed, oldest first.
    pub async fn get_overdue(&self, now: DateTime<Utc>) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let entities = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .filter(entity::maintenance_record::Column::ScheduledDate.lt(now))
            .order_by_asc(entity::maintenance_record::Column::ScheduledDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MaintenanceRecord::from_entity).collect())
    }

    pub async fn count_overdue(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .filter(entity::maintenance_record::Column::ScheduledDate.lt(now))
            .count(self.db)
            .await
    }

    /// Records of any status scheduled within `[start, end]`, soonest first.
    pub async fn get_scheduled_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let entities = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::ScheduledDate.between(start, end))
            .order_by_asc(entity::maintenance_record::Column::ScheduledDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MaintenanceRecord::from_entity).collect())
    }

    pub async fn update(&self, record: MaintenanceRecord) -> Result<MaintenanceRecord, DbErr> {
        let entity = entity::maintenance_record::ActiveModel {
            id: ActiveValue::Unchanged(record.id),
            asset_id: ActiveValue::Unchanged(record.asset_id),
            dock_id: ActiveValue::Unchanged(record.dock_id),
            maintenance_type: ActiveValue::Set(record.maintenance_type),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(record.description),
            status: ActiveValue::Set(record.status),
            scheduled_date: ActiveValue::Set(record.scheduled_date),
            completed_date: ActiveValue::Set(record.completed_date),
            assigned_to: ActiveValue::Set(record.assigned_to),
            estimated_cost: ActiveValue::Set(record.estimated_cost),
            actual_cost: ActiveValue::Set(record.actual_cost),
            work_performed: ActiveValue::Set(record.work_performed),
            parts_replaced: ActiveValue::Set(record.parts_replaced),
            notes: ActiveValue::Set(record.notes),
            labor_hours: ActiveValue::Set(record.labor_hours),
            created_at: ActiveValue::Unchanged(record.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(MaintenanceRecord::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MaintenanceRecord::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Computes record counts, the overdue count at `now` and total actual spend.
    ///
    /// `upcoming` counts every SCHEDULED record regardless of date.
    pub async fn stats(&self, now: DateTime<Utc>) -> Result<MaintenanceStats, DbErr> {
        let total = entity::prelude::MaintenanceRecord::find()
            .count(self.db)
            .await?;
        let upcoming = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .count(self.db)
            .await?;
        let overdue = self.count_overdue(now).await?;

        let by_type = entity::prelude::MaintenanceRecord::find()
            .select_only()
            .column(entity::maintenance_record::Column::MaintenanceType)
            .column_as(entity::maintenance_record::Column::Id.count(), "count")
            .group_by(entity::maintenance_record::Column::MaintenanceType)
            .order_by_asc(entity::maintenance_record::Column::MaintenanceType)
            .into_tuple::<(MaintenanceType, i64)>()
            .all(self.db)
            .await?;

        let total_cost = entity::prelude::MaintenanceRecord::find()
            .select_only()
            .column_as(entity::maintenance_record::Column::ActualCost.sum(), "total")
            .filter(entity::maintenance_record::Column::ActualCost.is_not_null())
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten()
            .unwrap_or(0.0);

        Ok(MaintenanceStats {
            total,
            upcoming,
            overdue,
            by_type: by_type
                .into_iter()
                .map(|(maintenance_type, count)| (maintenance_type, count as u64))
                .collect(),
            total_cost,
        })
    }
}
