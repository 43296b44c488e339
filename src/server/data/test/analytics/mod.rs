use crate::server::{data::analytics::AnalyticsRepository, model::analytics::RevenueRange};
use chrono::{Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::{
    DockStatus, MaintenanceType, MembershipTier, ServiceRequestStatus,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_visit_docks;
mod counts;
mod maintenance_by_type;
mod requests_by_type;
mod revenue_totals;
mod top_customers;
