//! Feedback data repository for database operations.
//!
//! Besides CRUD, computes the rating statistics: overall and per-category averages
//! only consider feedback that carries a rating.

use chrono::Utc;
use entity::sea_orm_active_enums::FeedbackCategory;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    analytics::mean_or_zero,
    feedback::{
        CreateFeedbackParams, Feedback, FeedbackCategoryStats, FeedbackFilter, FeedbackStats,
    },
};

pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            category: ActiveValue::Set(params.category),
            rating: ActiveValue::Set(params.rating),
            comments: ActiveValue::Set(params.comments),
            sentiment_score: ActiveValue::Set(params.sentiment_score),
            reviewed: ActiveValue::Set(false),
            staff_response: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Feedback>, DbErr> {
        let entity = entity::prelude::Feedback::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Feedback::from_entity))
    }

    /// Lists feedback, newest first.
    pub async fn get_all(&self, filter: FeedbackFilter) -> Result<Vec<Feedback>, DbErr> {
        let mut query = entity::prelude::Feedback::find();
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(entity::feedback::Column::CustomerId.eq(customer_id));
        }
        if filter.unreviewed {
            query = query.filter(entity::feedback::Column::Reviewed.eq(false));
        }

        let entities = query
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .order_by_desc(entity::feedback::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }

    pub async fn update(&self, feedback: Feedback) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            id: ActiveValue::Unchanged(feedback.id),
            customer_id: ActiveValue::Unchanged(feedback.customer_id),
            category: ActiveValue::Set(feedback.category),
            rating: ActiveValue::Set(feedback.rating),
            comments: ActiveValue::Set(feedback.comments),
            sentiment_score: ActiveValue::Set(feedback.sentiment_score),
            reviewed: ActiveValue::Set(feedback.reviewed),
            staff_response: ActiveValue::Set(feedback.staff_response),
            created_at: ActiveValue::Unchanged(feedback.created_at),
        }
        .update(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Feedback::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Computes totals and average ratings, overall and per category.
    pub async fn stats(&self) -> Result<FeedbackStats, DbErr> {
        let total = entity::prelude::Feedback::find().count(self.db).await?;
        let unreviewed = entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::Reviewed.eq(false))
            .count(self.db)
            .await?;

        // SUM over an integer column comes back as an integer
        let overall = entity::prelude::Feedback::find()
            .select_only()
            .column_as(entity::feedback::Column::Rating.sum(), "rating_sum")
            .column_as(entity::feedback::Column::Rating.count(), "rated")
            .into_tuple::<(Option<i64>, i64)>()
            .one(self.db)
            .await?;
        let average_rating = overall
            .map(|(sum, rated)| mean_or_zero(sum.map(|s| s as f64), rated as u64))
            .unwrap_or(0.0);

        let by_category = entity::prelude::Feedback::find()
            .select_only()
            .column(entity::feedback::Column::Category)
            .column_as(entity::feedback::Column::Id.count(), "count")
            .column_as(entity::feedback::Column::Rating.sum(), "rating_sum")
            .column_as(entity::feedback::Column::Rating.count(), "rated")
            .group_by(entity::feedback::Column::Category)
            .order_by_asc(entity::feedback::Column::Category)
            .into_tuple::<(FeedbackCategory, i64, Option<i64>, i64)>()
            .all(self.db)
            .await?;

        let category_stats = by_category
            .into_iter()
            .map(|(category, count, sum, rated)| FeedbackCategoryStats {
                category,
                count: count as u64,
                avg_rating: mean_or_zero(sum.map(|s| s as f64), rated as u64),
            })
            .collect();

        Ok(FeedbackStats {
            total,
            unreviewed,
            average_rating,
            category_stats,
        })
    }
}
