//! Visit data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::visit::{CreateVisitParams, Visit};

pub struct VisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new visit. The customer must already exist.
    pub async fn create(&self, params: CreateVisitParams) -> Result<Visit, DbErr> {
        let entity = entity::visit::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            check_in_time: ActiveValue::Set(params.check_in_time),
            check_out_time: ActiveValue::Set(params.check_out_time),
            dock_number: ActiveValue::Set(params.dock_number),
            boat_name: ActiveValue::Set(params.boat_name),
            boat_type: ActiveValue::Set(params.boat_type),
            service_charges: ActiveValue::Set(params.service_charges),
            services_used: ActiveValue::Set(params.services_used),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Visit::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Visit>, DbErr> {
        let entity = entity::prelude::Visit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Visit::from_entity))
    }

    /// Lists visits by most recent check-in, optionally for a single customer.
    pub async fn get_all(&self, customer_id: Option<i32>) -> Result<Vec<Visit>, DbErr> {
        let mut query = entity::prelude::Visit::find();
        if let Some(customer_id) = customer_id {
            query = query.filter(entity::visit::Column::CustomerId.eq(customer_id));
        }

        let entities = query
            .order_by_desc(entity::visit::Column::CheckInTime)
            .order_by_desc(entity::visit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Visit::from_entity).collect())
    }

    /// Lists visits without a checkout, most recent check-in first.
    pub async fn get_active(&self) -> Result<Vec<Visit>, DbErr> {
        let entities = entity::prelude::Visit::find()
            .filter(entity::visit::Column::CheckOutTime.is_null())
            .order_by_desc(entity::visit::Column::CheckInTime)
            .order_by_desc(entity::visit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Visit::from_entity).collect())
    }

    /// Persists every mutable field of the visit.
    pub async fn update(&self, visit: Visit) -> Result<Visit, DbErr> {
        let entity = entity::visit::ActiveModel {
            id: ActiveValue::Unchanged(visit.id),
            customer_id: ActiveValue::Unchanged(visit.customer_id),
            check_in_time: ActiveValue::Unchanged(visit.check_in_time),
            check_out_time: ActiveValue::Set(visit.check_out_time),
            dock_number: ActiveValue::Set(visit.dock_number),
            boat_name: ActiveValue::Set(visit.boat_name),
            boat_type: ActiveValue::Set(visit.boat_type),
            service_charges: ActiveValue::Set(visit.service_charges),
            services_used: ActiveValue::Set(visit.services_used),
            notes: ActiveValue::Set(visit.notes),
            created_at: ActiveValue::Unchanged(visit.created_at),
        }
        .update(self.db)
        .await?;

        Ok(Visit::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Visit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
