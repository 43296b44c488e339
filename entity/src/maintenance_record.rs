use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: Option<i32>,
    pub dock_id: Option<i32>,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: MaintenanceStatus,
    pub scheduled_date: DateTimeUtc,
    pub completed_date: Option<DateTimeUtc>,
    pub assigned_to: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub estimated_cost: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub actual_cost: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub work_performed: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub parts_replaced: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub labor_hours: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::dock::Entity",
        from = "Column::DockId",
        to = "super::dock::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Dock,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::dock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
