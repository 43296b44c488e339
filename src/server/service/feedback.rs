use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, feedback::FeedbackRepository},
    error::AppError,
    model::feedback::{
        CreateFeedbackParams, Feedback, FeedbackFilter, FeedbackStats, UpdateFeedbackParams,
    },
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores feedback left by an existing customer.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored feedback, unreviewed
    /// - `Err(AppError::BadRequest)` - Referenced customer does not exist
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, AppError> {
        let customer = CustomerRepository::new(self.db)
            .find_by_id(params.customer_id)
            .await?;
        if customer.is_none() {
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                params.customer_id
            )));
        }

        Ok(FeedbackRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, filter: FeedbackFilter) -> Result<Vec<Feedback>, AppError> {
        Ok(FeedbackRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Feedback, AppError> {
        FeedbackRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateFeedbackParams,
    ) -> Result<Feedback, AppError> {
        let repo = FeedbackRepository::new(self.db);
        let feedback = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Ok(repo.update(feedback.merge(params)).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FeedbackRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn stats(&self) -> Result<FeedbackStats, AppError> {
        Ok(FeedbackRepository::new(self.db).stats().await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Feedback {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::FeedbackCategory;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_requires_existing_customer() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = FeedbackService::new(db)
            .create(CreateFeedbackParams {
                customer_id: 11,
                category: FeedbackCategory::Staff,
                rating: Some(4),
                comments: "Helpful harbour master".to_string(),
                sentiment_score: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expected: reviewing feedback drops it from the unreviewed listing and count
    #[tokio::test]
    async fn review_updates_unreviewed_listing() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let customer = factory::create_customer(db).await.unwrap();
        let feedback = factory::create_feedback(db, customer.id).await.unwrap();
        let service = FeedbackService::new(db);
        let unreviewed = FeedbackFilter {
            unreviewed: true,
            ..Default::default()
        };

        assert_eq!(service.get_all(unreviewed).await.unwrap().len(), 1);

        let updated = service
            .update(
                feedback.id,
                UpdateFeedbackParams {
                    reviewed: Some(true),
                    staff_response: Some("Thank you".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.reviewed);
        assert_eq!(updated.staff_response.as_deref(), Some("Thank you"));

        assert!(service.get_all(unreviewed).await.unwrap().is_empty());
        assert_eq!(service.stats().await.unwrap().unreviewed, 0);
    }

    #[tokio::test]
    async fn missing_feedback_is_not_found() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(matches!(
            FeedbackService::new(db).delete(1).await,
            Err(AppError::NotFound(_))
        ));
    }
}
