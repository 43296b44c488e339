//! Dock fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{
    dock,
    sea_orm_active_enums::{DockSize, DockStatus},
};

/// Default test dock number.
pub const DEFAULT_DOCK_NUMBER: &str = "A1";

/// Creates a dock entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - dock_number: `"A1"`
/// - size: `Medium`
/// - status: `Available`
///
/// # Returns
/// - `dock::Model` - In-memory dock entity
pub fn entity() -> dock::Model {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    dock::Model {
        id: 1,
        dock_number: DEFAULT_DOCK_NUMBER.to_string(),
        name: "Dock A1".to_string(),
        size: DockSize::Medium,
        status: DockStatus::Available,
        location: None,
        description: None,
        max_boat_length: None,
        depth: None,
        power_amperage: None,
        has_water: true,
        has_sewage: false,
        has_fuel: false,
        amenities: None,
        built_date: None,
        last_maintenance_date: None,
        next_maintenance_date: None,
        maintenance_interval: None,
        notes: None,
        created_at: created,
        updated_at: created,
    }
}
