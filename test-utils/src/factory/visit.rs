//! Visit factory for creating test visit entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visits with customizable fields.
///
/// Visits reference a customer, so one must exist before building.
pub struct VisitFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    dock_number: String,
    check_in_time: DateTime<Utc>,
    check_out_time: Option<DateTime<Utc>>,
    boat_name: Option<String>,
    service_charges: f64,
}

impl<'a> VisitFactory<'a> {
    /// Creates a new VisitFactory with default values.
    ///
    /// Defaults:
    /// - dock_number: `"A1"`
    /// - check_in_time: now
    /// - check_out_time: `None` (active visit)
    /// - boat_name: `None`
    /// - service_charges: `0.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - Id of the visiting customer
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            dock_number: "A1".to_string(),
            check_in_time: Utc::now(),
            check_out_time: None,
            boat_name: None,
            service_charges: 0.0,
        }
    }

    pub fn dock_number(mut self, dock_number: impl Into<String>) -> Self {
        self.dock_number = dock_number.into();
        self
    }

    pub fn check_in_time(mut self, check_in_time: DateTime<Utc>) -> Self {
        self.check_in_time = check_in_time;
        self
    }

    pub fn check_out_time(mut self, check_out_time: DateTime<Utc>) -> Self {
        self.check_out_time = Some(check_out_time);
        self
    }

    /// Marks the visit as finished one hour after check-in.
    pub fn checked_out(mut self) -> Self {
        self.check_out_time = Some(self.check_in_time + Duration::hours(1));
        self
    }

    pub fn boat_name(mut self, boat_name: impl Into<String>) -> Self {
        self.boat_name = Some(boat_name.into());
        self
    }

    pub fn service_charges(mut self, service_charges: f64) -> Self {
        self.service_charges = service_charges;
        self
    }

    /// Builds and inserts the visit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::visit::Model)` - Created visit entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown customer)
    pub async fn build(self) -> Result<entity::visit::Model, DbErr> {
        entity::visit::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            check_in_time: ActiveValue::Set(self.check_in_time),
            check_out_time: ActiveValue::Set(self.check_out_time),
            dock_number: ActiveValue::Set(self.dock_number),
            boat_name: ActiveValue::Set(self.boat_name),
            boat_type: ActiveValue::Set(None),
            service_charges: ActiveValue::Set(self.service_charges),
            services_used: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a checked-out visit with default values for the given customer.
pub async fn create_visit(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, customer_id).checked_out().build().await
}

/// Creates an active (not checked out) visit at the given dock.
pub async fn create_active_visit(
    db: &DatabaseConnection,
    customer_id: i32,
    dock_number: impl Into<String>,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, customer_id)
        .dock_number(dock_number)
        .build()
        .await
}
