use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceRequestStatusDto {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceRequestPriorityDto {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestDto {
    pub id: i32,
    pub customer_id: i32,
    pub service_type: String,
    pub description: String,
    pub title: Option<String>,
    pub status: ServiceRequestStatusDto,
    pub priority: ServiceRequestPriorityDto,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequestDto {
    pub customer_id: i32,
    pub service_type: String,
    pub description: String,
    pub title: Option<String>,
    pub status: Option<ServiceRequestStatusDto>,
    pub priority: Option<ServiceRequestPriorityDto>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequestDto {
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
    pub status: Option<ServiceRequestStatusDto>,
    pub priority: Option<ServiceRequestPriorityDto>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub notes: Option<String>,
}
