use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackCategoryDto {
    ServiceQuality,
    Facilities,
    Staff,
    Pricing,
    General,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub id: i32,
    pub customer_id: i32,
    pub category: FeedbackCategoryDto,
    pub rating: Option<i32>,
    pub comments: String,
    pub sentiment_score: Option<i32>,
    pub reviewed: bool,
    pub staff_response: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackDto {
    pub customer_id: i32,
    pub category: Option<FeedbackCategoryDto>,
    pub rating: Option<i32>,
    pub comments: String,
    pub sentiment_score: Option<i32>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackDto {
    pub category: Option<FeedbackCategoryDto>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub sentiment_score: Option<i32>,
    pub reviewed: Option<bool>,
    pub staff_response: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCategoryStatsDto {
    pub category: FeedbackCategoryDto,
    pub count: u64,
    pub avg_rating: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatsDto {
    pub total: u64,
    pub unreviewed: u64,
    pub average_rating: f64,
    pub category_stats: Vec<FeedbackCategoryStatsDto>,
}
