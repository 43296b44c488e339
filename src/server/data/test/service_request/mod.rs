use crate::server::{
    data::service_request::ServiceRequestRepository,
    model::service_request::{ServiceRequest, UpdateServiceRequestParams},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ServiceRequestStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
