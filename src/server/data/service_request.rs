//! Service request data repository for database operations.

use chrono::Utc;
use entity::sea_orm_active_enums::ServiceRequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::service_request::{CreateServiceRequestParams, ServiceRequest};

pub struct ServiceRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceRequestParams,
    ) -> Result<ServiceRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::service_request::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            service_type: ActiveValue::Set(params.service_type),
            description: ActiveValue::Set(params.description),
            title: ActiveValue::Set(params.title),
            status: ActiveValue::Set(params.status),
            priority: ActiveValue::Set(params.priority),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            requested_date: ActiveValue::Set(params.requested_date),
            completed_date: ActiveValue::Set(None),
            estimated_cost: ActiveValue::Set(params.estimated_cost),
            actual_cost: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServiceRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServiceRequest>, DbErr> {
        let entity = entity::prelude::ServiceRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ServiceRequest::from_entity))
    }

    /// Lists service requests, newest first.
    ///
    /// # Arguments
    /// - `customer_id` - Restrict to one customer's requests
    /// - `status` - Restrict to one status
    pub async fn get_all(
        &self,
        customer_id: Option<i32>,
        status: Option<ServiceRequestStatus>,
    ) -> Result<Vec<ServiceRequest>, DbErr> {
        let mut query = entity::prelude::ServiceRequest::find();
        if let Some(customer_id) = customer_id {
            query = query.filter(entity::service_request::Column::CustomerId.eq(customer_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::service_request::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::service_request::Column::CreatedAt)
            .order_by_desc(entity::service_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServiceRequest::from_entity).collect())
    }

    pub async fn update(&self, request: ServiceRequest) -> Result<ServiceRequest, DbErr> {
        let entity = entity::service_request::ActiveModel {
            id: ActiveValue::Unchanged(request.id),
            customer_id: ActiveValue::Unchanged(request.customer_id),
            service_type: ActiveValue::Set(request.service_type),
            description: ActiveValue::Set(request.description),
            title: ActiveValue::Set(request.title),
            status: ActiveValue::Set(request.status),
            priority: ActiveValue::Set(request.priority),
            scheduled_date: ActiveValue::Set(request.scheduled_date),
            requested_date: ActiveValue::Set(request.requested_date),
            completed_date: ActiveValue::Set(request.completed_date),
            estimated_cost: ActiveValue::Set(request.estimated_cost),
            actual_cost: ActiveValue::Set(request.actual_cost),
            notes: ActiveValue::Set(request.notes),
            created_at: ActiveValue::Unchanged(request.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(ServiceRequest::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServiceRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
