use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceTypeDto {
    Routine,
    Preventive,
    Corrective,
    Emergency,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatusDto {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordDto {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub dock_id: Option<i32>,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceTypeDto,
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatusDto,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub work_performed: Option<String>,
    pub parts_replaced: Option<String>,
    pub notes: Option<String>,
    pub labor_hours: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRecordDto {
    pub asset_id: Option<i32>,
    pub dock_id: Option<i32>,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceTypeDto,
    pub title: String,
    pub description: String,
    pub status: Option<MaintenanceStatusDto>,
    pub scheduled_date: DateTime<Utc>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRecordDto {
    #[serde(rename = "type")]
    pub maintenance_type: Option<MaintenanceTypeDto>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<MaintenanceStatusDto>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub work_performed: Option<String>,
    pub parts_replaced: Option<String>,
    pub notes: Option<String>,
    pub labor_hours: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTypeCountDto {
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceTypeDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatsDto {
    pub total: u64,
    pub upcoming: u64,
    pub overdue: u64,
    pub by_type: Vec<MaintenanceTypeCountDto>,
    pub total_cost: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCostPredictionDto {
    pub months: u32,
    pub upcoming_count: u64,
    pub estimated_cost: f64,
    pub breakdown: Vec<MaintenanceRecordDto>,
}
