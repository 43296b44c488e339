//! Feedback factory for creating test feedback entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FeedbackCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test feedback with customizable fields.
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    category: FeedbackCategory,
    rating: Option<i32>,
    comments: String,
    reviewed: bool,
    created_at: DateTime<Utc>,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values.
    ///
    /// Defaults:
    /// - category: `General`
    /// - rating: `Some(5)`
    /// - reviewed: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            category: FeedbackCategory::General,
            rating: Some(5),
            comments: "Great stay".to_string(),
            reviewed: false,
            created_at: Utc::now(),
        }
    }

    pub fn category(mut self, category: FeedbackCategory) -> Self {
        self.category = category;
        self
    }

    pub fn rating(mut self, rating: Option<i32>) -> Self {
        self.rating = rating;
        self
    }

    pub fn reviewed(mut self, reviewed: bool) -> Self {
        self.reviewed = reviewed;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            category: ActiveValue::Set(self.category),
            rating: ActiveValue::Set(self.rating),
            comments: ActiveValue::Set(self.comments),
            sentiment_score: ActiveValue::Set(None),
            reviewed: ActiveValue::Set(self.reviewed),
            staff_response: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates unreviewed general feedback with default values.
pub async fn create_feedback(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db, customer_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::customer::create_customer};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_unreviewed_feedback_by_default() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Customer)
            .with_table(Feedback)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let customer = create_customer(db).await?;
        let feedback = create_feedback(db, customer.id).await?;

        assert!(!feedback.reviewed);
        assert_eq!(feedback.rating, Some(5));
        assert_eq!(feedback.category, FeedbackCategory::General);

        Ok(())
    }
}
