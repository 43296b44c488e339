use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetTypeDto {
    Dock,
    PowerStation,
    WaterSystem,
    FuelStation,
    Equipment,
    Building,
    Other,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatusDto {
    Operational,
    MaintenanceRequired,
    UnderMaintenance,
    OutOfService,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetTypeDto,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatusDto,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetDto {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetTypeDto,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<AssetStatusDto>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetTypeDto>,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<AssetStatusDto>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeCountDto {
    #[serde(rename = "type")]
    pub asset_type: AssetTypeDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatusCountDto {
    pub status: AssetStatusDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatsDto {
    pub total: u64,
    pub by_type: Vec<AssetTypeCountDto>,
    pub by_status: Vec<AssetStatusCountDto>,
}
