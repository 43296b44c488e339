use crate::server::{data::asset::AssetRepository, model::asset::AssetFilter};
use entity::sea_orm_active_enums::{AssetStatus, AssetType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod stats;
