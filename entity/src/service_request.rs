use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ServiceRequestPriority, ServiceRequestStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub service_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub title: Option<String>,
    pub status: ServiceRequestStatus,
    pub priority: ServiceRequestPriority,
    pub scheduled_date: Option<DateTimeUtc>,
    pub requested_date: Option<DateTimeUtc>,
    pub completed_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Double", nullable)]
    pub estimated_cost: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub actual_cost: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
