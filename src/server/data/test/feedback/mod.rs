use crate::server::{data::feedback::FeedbackRepository, model::feedback::FeedbackFilter};
use entity::sea_orm_active_enums::FeedbackCategory;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod stats;
