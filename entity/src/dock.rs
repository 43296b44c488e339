use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{DockSize, DockStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub dock_number: String,
    pub name: String,
    pub size: DockSize,
    pub status: DockStatus,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub max_boat_length: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: bool,
    pub has_sewage: bool,
    pub has_fuel: bool,
    pub amenities: Option<Json>,
    pub built_date: Option<Date>,
    pub last_maintenance_date: Option<Date>,
    pub next_maintenance_date: Option<Date>,
    pub maintenance_interval: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
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
