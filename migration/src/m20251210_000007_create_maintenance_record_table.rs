use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000003_create_dock_table::Dock, m20251210_000006_create_asset_table::Asset,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRecord::Id))
                    .col(integer_null(MaintenanceRecord::AssetId))
                    .col(integer_null(MaintenanceRecord::DockId))
                    .col(string(MaintenanceRecord::MaintenanceType))
                    .col(string(MaintenanceRecord::Title))
                    .col(text(MaintenanceRecord::Description))
                    .col(string(MaintenanceRecord::Status).default("SCHEDULED"))
                    .col(timestamp_with_time_zone(MaintenanceRecord::ScheduledDate))
                    .col(timestamp_with_time_zone_null(MaintenanceRecord::CompletedDate))
                    .col(string_null(MaintenanceRecord::AssignedTo))
                    .col(double_null(MaintenanceRecord::EstimatedCost))
                    .col(double_null(MaintenanceRecord::ActualCost))
                    .col(text_null(MaintenanceRecord::WorkPerformed))
                    .col(text_null(MaintenanceRecord::PartsReplaced))
                    .col(text_null(MaintenanceRecord::Notes))
                    .col(integer_null(MaintenanceRecord::LaborHours))
                    .col(
                        timestamp_with_time_zone(MaintenanceRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(MaintenanceRecord::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_record_asset_id")
                            .from(MaintenanceRecord::Table, MaintenanceRecord::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_record_dock_id")
                            .from(MaintenanceRecord::Table, MaintenanceRecord::DockId)
                            .to(Dock::Table, Dock::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecord {
    Table,
    Id,
    AssetId,
    DockId,
    MaintenanceType,
    Title,
    Description,
    Status,
    ScheduledDate,
    CompletedDate,
    AssignedTo,
    EstimatedCost,
    ActualCost,
    WorkPerformed,
    PartsReplaced,
    Notes,
    LaborHours,
    CreatedAt,
    UpdatedAt,
}
