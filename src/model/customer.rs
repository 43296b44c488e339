use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTierDto {
    Basic,
    Silver,
    Gold,
    Platinum,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: MembershipTierDto,
    pub loyalty_points: i32,
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: Option<MembershipTierDto>,
    pub loyalty_points: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<Value>,
    pub notes: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: Option<MembershipTierDto>,
    pub loyalty_points: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<Value>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyPointsDto {
    pub points: i32,
}
