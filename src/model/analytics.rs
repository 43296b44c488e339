use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    customer::MembershipTierDto, maintenance::MaintenanceTypeDto,
    service_request::ServiceRequestStatusDto,
};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeTypeDto {
    Positive,
    Negative,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewDto {
    pub total_customers: u64,
    pub active_visits: u64,
    pub pending_requests: u64,
    pub unreviewed_feedback: u64,
    pub total_docks: u64,
    pub customers_change: String,
    pub customers_change_type: ChangeTypeDto,
    pub visits_change: String,
    pub visits_change_type: ChangeTypeDto,
    pub requests_change: String,
    pub requests_change_type: ChangeTypeDto,
    pub feedback_change: String,
    pub feedback_change_type: ChangeTypeDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalyticsDto {
    pub total_revenue: f64,
    pub total_visits: u64,
    pub average_revenue: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipCountDto {
    pub tier: MembershipTierDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub membership_tier: MembershipTierDto,
    pub visit_count: u64,
    pub total_spent: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInsightsDto {
    pub membership_distribution: Vec<MembershipCountDto>,
    pub top_customers: Vec<TopCustomerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestsByTypeDto {
    pub service_type: String,
    pub count: u64,
    pub avg_cost: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestsByStatusDto {
    pub status: ServiceRequestStatusDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAnalyticsDto {
    pub requests_by_type: Vec<RequestsByTypeDto>,
    pub requests_by_status: Vec<RequestsByStatusDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceByTypeDto {
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceTypeDto,
    pub count: u64,
    pub total_cost: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpendingDto {
    /// Calendar month formatted as `YYYY-MM`.
    pub month: String,
    pub total_cost: f64,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAnalyticsDto {
    pub maintenance_by_type: Vec<MaintenanceByTypeDto>,
    pub monthly_spending: Vec<MonthlySpendingDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyDto {
    pub total_docks: u64,
    pub occupied_docks: u64,
    pub available_docks: u64,
    pub maintenance_docks: u64,
    pub out_of_service_docks: u64,
    pub occupancy_rate: f64,
}
