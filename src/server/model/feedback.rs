//! Customer feedback domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FeedbackCategory;

use crate::{
    model::feedback::{
        CreateFeedbackDto, FeedbackCategoryStatsDto, FeedbackDto, FeedbackStatsDto,
        UpdateFeedbackDto,
    },
    server::{
        error::AppError,
        model::analytics::round_half_up,
        util::validate::{require_in_range, require_non_empty},
    },
};

const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub customer_id: i32,
    pub category: FeedbackCategory,
    pub rating: Option<i32>,
    pub comments: String,
    pub sentiment_score: Option<i32>,
    pub reviewed: bool,
    pub staff_response: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            category: entity.category,
            rating: entity.rating,
            comments: entity.comments,
            sentiment_score: entity.sentiment_score,
            reviewed: entity.reviewed,
            staff_response: entity.staff_response,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            customer_id: self.customer_id,
            category: self.category.into(),
            rating: self.rating,
            comments: self.comments,
            sentiment_score: self.sentiment_score,
            reviewed: self.reviewed,
            staff_response: self.staff_response,
            created_at: self.created_at,
        }
    }

    pub fn merge(self, params: UpdateFeedbackParams) -> Self {
        Self {
            category: params.category.unwrap_or(self.category),
            rating: params.rating.or(self.rating),
            comments: params.comments.unwrap_or(self.comments),
            sentiment_score: params.sentiment_score.or(self.sentiment_score),
            reviewed: params.reviewed.unwrap_or(self.reviewed),
            staff_response: params.staff_response.or(self.staff_response),
            ..self
        }
    }
}

fn validate_scores(rating: Option<i32>, sentiment_score: Option<i32>) -> Result<(), AppError> {
    require_in_range("rating", rating, MIN_SCORE, MAX_SCORE)?;
    require_in_range("sentimentScore", sentiment_score, MIN_SCORE, MAX_SCORE)
}

/// Listing filters for feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackFilter {
    pub customer_id: Option<i32>,
    pub unreviewed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackCategoryStats {
    pub category: FeedbackCategory,
    pub count: u64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub total: u64,
    pub unreviewed: u64,
    pub average_rating: f64,
    pub category_stats: Vec<FeedbackCategoryStats>,
}

impl FeedbackStats {
    pub fn into_dto(self) -> FeedbackStatsDto {
        FeedbackStatsDto {
            total: self.total,
            unreviewed: self.unreviewed,
            average_rating: round_half_up(self.average_rating, 2),
            category_stats: self
                .category_stats
                .into_iter()
                .map(|stats| FeedbackCategoryStatsDto {
                    category: stats.category.into(),
                    count: stats.count,
                    avg_rating: round_half_up(stats.avg_rating, 2),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub customer_id: i32,
    pub category: FeedbackCategory,
    pub rating: Option<i32>,
    pub comments: String,
    pub sentiment_score: Option<i32>,
}

impl CreateFeedbackParams {
    /// Validates the request body; category defaults to GENERAL.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty comments, or a score outside 1..=5
    pub fn from_dto(dto: CreateFeedbackDto) -> Result<Self, AppError> {
        require_non_empty("comments", &dto.comments)?;
        validate_scores(dto.rating, dto.sentiment_score)?;

        Ok(Self {
            customer_id: dto.customer_id,
            category: dto
                .category
                .map(Into::into)
                .unwrap_or(FeedbackCategory::General),
            rating: dto.rating,
            comments: dto.comments,
            sentiment_score: dto.sentiment_score,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFeedbackParams {
    pub category: Option<FeedbackCategory>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub sentiment_score: Option<i32>,
    pub reviewed: Option<bool>,
    pub staff_response: Option<String>,
}

impl UpdateFeedbackParams {
    pub fn from_dto(dto: UpdateFeedbackDto) -> Result<Self, AppError> {
        if let Some(comments) = &dto.comments {
            require_non_empty("comments", comments)?;
        }
        validate_scores(dto.rating, dto.sentiment_score)?;

        Ok(Self {
            category: dto.category.map(Into::into),
            rating: dto.rating,
            comments: dto.comments,
            sentiment_score: dto.sentiment_score,
            reviewed: dto.reviewed,
            staff_response: dto.staff_response,
        })
    }
}
