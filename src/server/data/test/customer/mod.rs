use crate::server::{
    data::customer::CustomerRepository,
    model::customer::{CreateCustomerParams, UpdateCustomerParams},
};
use entity::sea_orm_active_enums::MembershipTier;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params(email: &str) -> CreateCustomerParams {
    CreateCustomerParams {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        phone: Some("555-0199".to_string()),
        address: None,
        membership_tier: MembershipTier::Basic,
        loyalty_points: 0,
        preferences: None,
        notes: None,
    }
}
