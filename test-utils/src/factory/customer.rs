//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MembershipTier;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::customer::CustomerFactory;
///
/// let customer = CustomerFactory::new(&db)
///     .first_name("Ada")
///     .membership_tier(MembershipTier::Gold)
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    membership_tier: MembershipTier,
    loyalty_points: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Customer"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - email: `"customer{id}@example.com"`
    /// - phone: `None`
    /// - membership_tier: `Basic`
    /// - loyalty_points: `0`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CustomerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Customer".to_string(),
            last_name: id.to_string(),
            email: format!("customer{}@example.com", id),
            phone: None,
            membership_tier: MembershipTier::Basic,
            loyalty_points: 0,
            created_at: Utc::now(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn membership_tier(mut self, tier: MembershipTier) -> Self {
        self.membership_tier = tier;
        self
    }

    pub fn loyalty_points(mut self, points: i32) -> Self {
        self.loyalty_points = points;
        self
    }

    /// Sets the creation timestamp, used by growth comparisons.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            address: ActiveValue::Set(None),
            membership_tier: ActiveValue::Set(self.membership_tier),
            loyalty_points: ActiveValue::Set(self.loyalty_points),
            preferences: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
///
/// Shorthand for `CustomerFactory::new(db).build().await`.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
