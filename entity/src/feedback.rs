use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::FeedbackCategory;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub category: FeedbackCategory,
    pub rating: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    pub sentiment_score: Option<i32>,
    pub reviewed: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub staff_response: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
