//! Customer fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{customer, sea_orm_active_enums::MembershipTier};

/// Default test customer first name.
pub const DEFAULT_FIRST_NAME: &str = "Grace";

/// Default test customer last name.
pub const DEFAULT_LAST_NAME: &str = "Hopper";

/// Default test customer email.
pub const DEFAULT_EMAIL: &str = "grace@example.com";

/// Creates a customer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - membership_tier: `Basic`
/// - loyalty_points: `0`
/// - timestamps: 2024-01-01T00:00:00Z
///
/// # Returns
/// - `customer::Model` - In-memory customer entity
pub fn entity() -> customer::Model {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    customer::Model {
        id: 1,
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        phone: None,
        address: None,
        membership_tier: MembershipTier::Basic,
        loyalty_points: 0,
        preferences: None,
        notes: None,
        created_at: created,
        updated_at: created,
    }
}

/// Creates a customer entity model with the given tier and points.
pub fn entity_with_points(tier: MembershipTier, loyalty_points: i32) -> customer::Model {
    customer::Model {
        membership_tier: tier,
        loyalty_points,
        ..entity()
    }
}
