use chrono::Utc;
use entity::sea_orm_active_enums::ServiceRequestStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, service_request::ServiceRequestRepository},
    error::AppError,
    model::service_request::{
        CreateServiceRequestParams, ServiceRequest, UpdateServiceRequestParams,
    },
};

pub struct ServiceRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a service request for an existing customer.
    ///
    /// # Returns
    /// - `Ok(ServiceRequest)` - The created request
    /// - `Err(AppError::BadRequest)` - Referenced customer does not exist
    pub async fn create(
        &self,
        params: CreateServiceRequestParams,
    ) -> Result<ServiceRequest, AppError> {
        let customer = CustomerRepository::new(self.db)
            .find_by_id(params.customer_id)
            .await?;
        if customer.is_none() {
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                params.customer_id
            )));
        }

        Ok(ServiceRequestRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        customer_id: Option<i32>,
        status: Option<ServiceRequestStatus>,
    ) -> Result<Vec<ServiceRequest>, AppError> {
        Ok(ServiceRequestRepository::new(self.db)
            .get_all(customer_id, status)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ServiceRequest, AppError> {
        ServiceRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies an update. Moving to COMPLETED without a completion date stamps the
    /// current time.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateServiceRequestParams,
    ) -> Result<ServiceRequest, AppError> {
        let repo = ServiceRequestRepository::new(self.db);
        let request = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Ok(repo.update(request.merge(params, Utc::now())).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ServiceRequestRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Service request {} not found", id))
}
