use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AssetStatus, AssetType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub asset_type: AssetType,
    pub identifier: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<Date>,
    #[sea_orm(column_type = "Double", nullable)]
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<Date>,
    pub expected_lifespan_years: Option<i32>,
    pub specifications: Option<Json>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<Date>,
    pub next_maintenance_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
