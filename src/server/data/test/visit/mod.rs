use crate::server::{
    data::visit::VisitRepository,
    model::visit::{CreateVisitParams, UpdateVisitParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod get_all;
mod update;
