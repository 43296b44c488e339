use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DockStatusDto {
    Available,
    Occupied,
    Maintenance,
    OutOfService,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DockSizeDto {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockDto {
    pub id: i32,
    pub dock_number: String,
    pub name: String,
    pub size: DockSizeDto,
    pub status: DockStatusDto,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: bool,
    pub has_sewage: bool,
    pub has_fuel: bool,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDockDto {
    pub dock_number: String,
    pub name: String,
    pub size: DockSizeDto,
    pub status: Option<DockStatusDto>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: Option<bool>,
    pub has_sewage: Option<bool>,
    pub has_fuel: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDockDto {
    pub dock_number: Option<String>,
    pub name: Option<String>,
    pub size: Option<DockSizeDto>,
    pub status: Option<DockStatusDto>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: Option<bool>,
    pub has_sewage: Option<bool>,
    pub has_fuel: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockStatusCountDto {
    pub status: DockStatusDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockSizeCountDto {
    pub size: DockSizeDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockStatsDto {
    pub total: u64,
    pub by_status: Vec<DockStatusCountDto>,
    pub by_size: Vec<DockSizeCountDto>,
}
