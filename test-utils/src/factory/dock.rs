//! Dock factory for creating test dock entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{DockSize, DockStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test docks with customizable fields.
pub struct DockFactory<'a> {
    db: &'a DatabaseConnection,
    dock_number: String,
    name: String,
    size: DockSize,
    status: DockStatus,
}

impl<'a> DockFactory<'a> {
    /// Creates a new DockFactory with default values.
    ///
    /// Defaults:
    /// - dock_number: `"D{id}"` where id is auto-incremented
    /// - name: `"Dock {id}"`
    /// - size: `Medium`
    /// - status: `Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dock_number: format!("D{}", id),
            name: format!("Dock {}", id),
            size: DockSize::Medium,
            status: DockStatus::Available,
        }
    }

    pub fn dock_number(mut self, dock_number: impl Into<String>) -> Self {
        self.dock_number = dock_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn size(mut self, size: DockSize) -> Self {
        self.size = size;
        self
    }

    pub fn status(mut self, status: DockStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the dock entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dock::Model)` - Created dock entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate dock number)
    pub async fn build(self) -> Result<entity::dock::Model, DbErr> {
        let now = Utc::now();
        entity::dock::ActiveModel {
            dock_number: ActiveValue::Set(self.dock_number),
            name: ActiveValue::Set(self.name),
            size: ActiveValue::Set(self.size),
            status: ActiveValue::Set(self.status),
            location: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            max_boat_length: ActiveValue::Set(None),
            depth: ActiveValue::Set(None),
            power_amperage: ActiveValue::Set(None),
            has_water: ActiveValue::Set(true),
            has_sewage: ActiveValue::Set(false),
            has_fuel: ActiveValue::Set(false),
            amenities: ActiveValue::Set(None),
            built_date: ActiveValue::Set(None),
            last_maintenance_date: ActiveValue::Set(None),
            next_maintenance_date: ActiveValue::Set(None),
            maintenance_interval: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available dock with default values.
pub async fn create_dock(db: &DatabaseConnection) -> Result<entity::dock::Model, DbErr> {
    DockFactory::new(db).build().await
}

/// Creates a dock with the given number and status.
pub async fn create_dock_with_status(
    db: &DatabaseConnection,
    dock_number: impl Into<String>,
    status: DockStatus,
) -> Result<entity::dock::Model, DbErr> {
    DockFactory::new(db)
        .dock_number(dock_number)
        .status(status)
        .build()
        .await
}
