//! Customer data repository for database operations.
//!
//! Provides the `CustomerRepository` for creating, searching, updating and deleting
//! customers, converting entity models into `Customer` domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::customer::{CreateCustomerParams, Customer};

/// Repository providing database operations for customers.
pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new customer.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The stored customer with generated id and timestamps
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let now = Utc::now();
        let entity = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            membership_tier: ActiveValue::Set(params.membership_tier),
            loyalty_points: ActiveValue::Set(params.loyalty_points),
            preferences: ActiveValue::Set(params.preferences),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Lists customers, newest first, optionally filtered by a search term.
    ///
    /// The term is matched as a substring of first name, last name, email or phone.
    ///
    /// # Arguments
    /// - `search` - Optional search term; blank terms are ignored
    pub async fn get_all(&self, search: Option<&str>) -> Result<Vec<Customer>, DbErr> {
        let mut query = entity::prelude::Customer::find();

        if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::customer::Column::FirstName.contains(term))
                    .add(entity::customer::Column::LastName.contains(term))
                    .add(entity::customer::Column::Email.contains(term))
                    .add(entity::customer::Column::Phone.contains(term)),
            );
        }

        let entities = query
            .order_by_desc(entity::customer::Column::CreatedAt)
            .order_by_desc(entity::customer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Persists every mutable field of the customer and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The stored customer
    /// - `Err(DbErr::RecordNotUpdated)` - No customer with that id
    pub async fn update(&self, customer: Customer) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            id: ActiveValue::Unchanged(customer.id),
            first_name: ActiveValue::Set(customer.first_name),
            last_name: ActiveValue::Set(customer.last_name),
            email: ActiveValue::Set(customer.email),
            phone: ActiveValue::Set(customer.phone),
            address: ActiveValue::Set(customer.address),
            membership_tier: ActiveValue::Set(customer.membership_tier),
            loyalty_points: ActiveValue::Set(customer.loyalty_points),
            preferences: ActiveValue::Set(customer.preferences),
            notes: ActiveValue::Set(customer.notes),
            created_at: ActiveValue::Unchanged(customer.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    /// Deletes a customer.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No customer with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
