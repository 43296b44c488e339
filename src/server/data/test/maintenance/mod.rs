use crate::server::data::maintenance::MaintenanceRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_overdue;
mod get_scheduled_between;
mod get_upcoming;
mod stats;
