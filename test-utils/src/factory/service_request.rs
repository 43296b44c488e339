//! Service request factory for creating test service request entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ServiceRequestPriority, ServiceRequestStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test service requests with customizable fields.
pub struct ServiceRequestFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    service_type: String,
    description: String,
    status: ServiceRequestStatus,
    priority: ServiceRequestPriority,
    estimated_cost: Option<f64>,
    actual_cost: Option<f64>,
    created_at: DateTime<Utc>,
}

impl<'a> ServiceRequestFactory<'a> {
    /// Creates a new ServiceRequestFactory with default values.
    ///
    /// Defaults:
    /// - service_type: `"Cleaning"`
    /// - status: `Pending`
    /// - priority: `Medium`
    /// - costs: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            service_type: "Cleaning".to_string(),
            description: "Hull cleaning".to_string(),
            status: ServiceRequestStatus::Pending,
            priority: ServiceRequestPriority::Medium,
            estimated_cost: None,
            actual_cost: None,
            created_at: Utc::now(),
        }
    }

    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    pub fn status(mut self, status: ServiceRequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: ServiceRequestPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn estimated_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }

    pub fn actual_cost(mut self, cost: f64) -> Self {
        self.actual_cost = Some(cost);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the service request entity into the database.
    pub async fn build(self) -> Result<entity::service_request::Model, DbErr> {
        entity::service_request::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            service_type: ActiveValue::Set(self.service_type),
            description: ActiveValue::Set(self.description),
            title: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            scheduled_date: ActiveValue::Set(None),
            requested_date: ActiveValue::Set(None),
            completed_date: ActiveValue::Set(None),
            estimated_cost: ActiveValue::Set(self.estimated_cost),
            actual_cost: ActiveValue::Set(self.actual_cost),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending service request with default values.
pub async fn create_service_request(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::service_request::Model, DbErr> {
    ServiceRequestFactory::new(db, customer_id).build().await
}
