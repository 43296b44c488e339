use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: i32,
    pub customer_id: i32,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: String,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: f64,
    #[schema(value_type = Option<Object>)]
    pub services_used: Option<Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisitDto {
    pub customer_id: i32,
    /// Defaults to the time of the request.
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: String,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: Option<f64>,
    #[schema(value_type = Option<Object>)]
    pub services_used: Option<Value>,
    pub notes: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisitDto {
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: Option<String>,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: Option<f64>,
    #[schema(value_type = Option<Object>)]
    pub services_used: Option<Value>,
    pub notes: Option<String>,
}
