//! Customer domain models and parameters.
//!
//! Provides the customer record, creation and update parameters, and the loyalty
//! tier progression applied when points are awarded.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MembershipTier;
use serde_json::Value;

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    server::{
        error::AppError,
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// Points needed to step up from one tier to the next.
const SILVER_THRESHOLD: i32 = 1000;
const GOLD_THRESHOLD: i32 = 2500;
const PLATINUM_THRESHOLD: i32 = 5000;

/// Marina customer with contact details and loyalty standing.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: MembershipTier,
    pub loyalty_points: i32,
    pub preferences: Option<Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            membership_tier: entity.membership_tier,
            loyalty_points: entity.loyalty_points,
            preferences: entity.preferences,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            membership_tier: self.membership_tier.into(),
            loyalty_points: self.loyalty_points,
            preferences: self.preferences,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies the whitelisted update fields, returning the updated customer.
    ///
    /// Fields left as `None` keep their current value. `updated_at` is not touched;
    /// the repository stamps it on save.
    pub fn merge(self, params: UpdateCustomerParams) -> Self {
        Self {
            first_name: params.first_name.unwrap_or(self.first_name),
            last_name: params.last_name.unwrap_or(self.last_name),
            email: params.email.unwrap_or(self.email),
            phone: params.phone.or(self.phone),
            address: params.address.or(self.address),
            membership_tier: params.membership_tier.unwrap_or(self.membership_tier),
            loyalty_points: params.loyalty_points.unwrap_or(self.loyalty_points),
            preferences: params.preferences.or(self.preferences),
            notes: params.notes.or(self.notes),
            ..self
        }
    }

    /// Adds loyalty points and advances the membership tier by at most one step.
    ///
    /// Thresholds: BASIC→SILVER at 1000, SILVER→GOLD at 2500, GOLD→PLATINUM at 5000.
    /// A large award on a BASIC customer therefore lands on SILVER; the next award
    /// moves them further.
    ///
    /// # Arguments
    /// - `points` - Points to add; may be negative to correct a previous award
    ///
    /// # Returns
    /// - `Ok(Customer)` - Customer with the new balance and tier
    /// - `Err(AppError::BadRequest)` - Balance would drop below zero
    pub fn award_loyalty_points(self, points: i32) -> Result<Self, AppError> {
        let loyalty_points = self.loyalty_points.saturating_add(points);
        if loyalty_points < 0 {
            return Err(AppError::BadRequest(
                "Loyalty points cannot drop below zero".to_string(),
            ));
        }

        let membership_tier = next_tier(self.membership_tier, loyalty_points);

        Ok(Self {
            loyalty_points,
            membership_tier,
            ..self
        })
    }
}

/// Single tier step for the given balance.
fn next_tier(current: MembershipTier, points: i32) -> MembershipTier {
    match current {
        MembershipTier::Basic if points >= SILVER_THRESHOLD => MembershipTier::Silver,
        MembershipTier::Silver if points >= GOLD_THRESHOLD => MembershipTier::Gold,
        MembershipTier::Gold if points >= PLATINUM_THRESHOLD => MembershipTier::Platinum,
        tier => tier,
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    require_non_empty("email", email)?;
    if !email.contains('@') {
        return Err(AppError::BadRequest("email must be a valid address".to_string()));
    }

    Ok(())
}

fn validate_points(points: Option<i32>) -> Result<(), AppError> {
    require_non_negative("loyaltyPoints", points.map(f64::from))
}

/// Parameters for creating a customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: MembershipTier,
    pub loyalty_points: i32,
    pub preferences: Option<Value>,
    pub notes: Option<String>,
}

impl CreateCustomerParams {
    /// Validates the request body and applies defaults (BASIC tier, zero points).
    ///
    /// # Returns
    /// - `Ok(CreateCustomerParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email or negative points
    pub fn from_dto(dto: CreateCustomerDto) -> Result<Self, AppError> {
        require_non_empty("firstName", &dto.first_name)?;
        require_non_empty("lastName", &dto.last_name)?;
        validate_email(&dto.email)?;
        validate_points(dto.loyalty_points)?;

        Ok(Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone,
            address: dto.address,
            membership_tier: dto
                .membership_tier
                .map(Into::into)
                .unwrap_or(MembershipTier::Basic),
            loyalty_points: dto.loyalty_points.unwrap_or(0),
            preferences: dto.preferences,
            notes: dto.notes,
        })
    }
}

/// Mutable customer fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_tier: Option<MembershipTier>,
    pub loyalty_points: Option<i32>,
    pub preferences: Option<Value>,
    pub notes: Option<String>,
}

impl UpdateCustomerParams {
    pub fn from_dto(dto: UpdateCustomerDto) -> Result<Self, AppError> {
        if let Some(first_name) = &dto.first_name {
            require_non_empty("firstName", first_name)?;
        }
        if let Some(last_name) = &dto.last_name {
            require_non_empty("lastName", last_name)?;
        }
        if let Some(email) = &dto.email {
            validate_email(email)?;
        }
        validate_points(dto.loyalty_points)?;

        Ok(Self {
            first_name: dto.first_name.map(|v| v.trim().to_string()),
            last_name: dto.last_name.map(|v| v.trim().to_string()),
            email: dto.email.map(|v| v.trim().to_string()),
            phone: dto.phone,
            address: dto.address,
            membership_tier: dto.membership_tier.map(Into::into),
            loyalty_points: dto.loyalty_points,
            preferences: dto.preferences,
            notes: dto.notes,
        })
    }
}
