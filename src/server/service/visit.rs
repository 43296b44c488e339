use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, visit::VisitRepository},
    error::AppError,
    model::visit::{CreateVisitParams, UpdateVisitParams, Visit},
};

pub struct VisitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a visit for an existing customer.
    ///
    /// # Returns
    /// - `Ok(Visit)` - The created visit
    /// - `Err(AppError::BadRequest)` - Referenced customer does not exist
    pub async fn create(&self, params: CreateVisitParams) -> Result<Visit, AppError> {
        let customer = CustomerRepository::new(self.db)
            .find_by_id(params.customer_id)
            .await?;
        if customer.is_none() {
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                params.customer_id
            )));
        }

        Ok(VisitRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, customer_id: Option<i32>) -> Result<Vec<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).get_all(customer_id).await?)
    }

    /// Visits without a check-out time, newest check-in first.
    pub async fn get_current(&self) -> Result<Vec<Visit>, AppError> {
        Ok(VisitRepository::new(self.db).get_active().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Visit, AppError> {
        VisitRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateVisitParams) -> Result<Visit, AppError> {
        let repo = VisitRepository::new(self.db);
        let visit = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Ok(repo.update(visit.merge(params)?).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VisitRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Visit {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    fn params(customer_id: i32) -> CreateVisitParams {
        CreateVisitParams {
            customer_id,
            check_in_time: Utc::now(),
            check_out_time: None,
            dock_number: "C4".to_string(),
            boat_name: Some("Sea Breeze".to_string()),
            boat_type: None,
            service_charges: 0.0,
            services_used: None,
            notes: None,
        }
    }

    /// Expected: BadRequest when the customer is unknown
    #[tokio::test]
    async fn create_requires_existing_customer() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = VisitService::new(db).create(params(42)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expected: created visit shows up as current until checked out
    #[tokio::test]
    async fn checkout_removes_visit_from_current() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let customer = factory::create_customer(db).await.unwrap();
        let service = VisitService::new(db);

        let visit = service.create(params(customer.id)).await.unwrap();
        assert_eq!(service.get_current().await.unwrap().len(), 1);

        service
            .update(
                visit.id,
                UpdateVisitParams {
                    check_out_time: Some(visit.check_in_time + Duration::hours(3)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(service.get_current().await.unwrap().is_empty());
    }

    /// Expected: BadRequest when check-out precedes check-in
    #[tokio::test]
    async fn update_rejects_checkout_before_checkin() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let customer = factory::create_customer(db).await.unwrap();
        let visit = factory::create_active_visit(db, customer.id, "A1")
            .await
            .unwrap();

        let result = VisitService::new(db)
            .update(
                visit.id,
                UpdateVisitParams {
                    check_out_time: Some(visit.check_in_time - Duration::hours(1)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expected: second delete is NotFound
    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let customer = factory::create_customer(db).await.unwrap();
        let visit = factory::create_visit(db, customer.id).await.unwrap();
        let service = VisitService::new(db);

        service.delete(visit.id).await.unwrap();

        assert!(matches!(
            service.delete(visit.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
