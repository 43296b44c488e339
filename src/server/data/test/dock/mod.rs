use crate::server::{
    data::dock::DockRepository,
    model::dock::{CreateDockParams, Dock, DockFilter, UpdateDockParams},
};
use entity::sea_orm_active_enums::{DockSize, DockStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod stats;
mod update;
