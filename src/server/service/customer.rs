//! Customer service handling registration, profile updates and loyalty awards.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{CreateCustomerParams, Customer, UpdateCustomerParams},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The created customer
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Customer with email {} already exists",
                params.email
            )));
        }

        let customer = repo.create(params).await?;
        tracing::info!("Created customer {}", customer.id);

        Ok(customer)
    }

    pub async fn get_all(&self, search: Option<&str>) -> Result<Vec<Customer>, AppError> {
        Ok(CustomerRepository::new(self.db).get_all(search).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies an update to an existing customer.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The updated customer
    /// - `Err(AppError::NotFound)` - No customer with that id
    /// - `Err(AppError::Conflict)` - New email belongs to another customer
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCustomerParams,
    ) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);
        let customer = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if let Some(email) = params.email.as_deref() {
            if let Some(existing) = repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(format!(
                        "Customer with email {} already exists",
                        email
                    )));
                }
            }
        }

        Ok(repo.update(customer.merge(params)).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CustomerRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted customer {}", id);

        Ok(())
    }

    /// Adds loyalty points and applies at most one tier promotion.
    ///
    /// # Returns
    /// - `Ok(Customer)` - Customer with the new balance and tier
    /// - `Err(AppError::NotFound)` - No customer with that id
    /// - `Err(AppError::BadRequest)` - Balance would drop below zero
    pub async fn add_loyalty_points(&self, id: i32, points: i32) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);
        let customer = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let previous_tier = customer.membership_tier;

        let customer = repo.update(customer.award_loyalty_points(points)?).await?;
        if customer.membership_tier != previous_tier {
            tracing::info!(
                "Customer {} promoted to {:?} at {} points",
                customer.id,
                customer.membership_tier,
                customer.loyalty_points
            );
        }

        Ok(customer)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}
