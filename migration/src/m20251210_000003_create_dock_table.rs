use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dock::Table)
                    .if_not_exists()
                    .col(pk_auto(Dock::Id))
                    .col(string_uniq(Dock::DockNumber))
                    .col(string(Dock::Name))
                    .col(string(Dock::Size))
                    .col(string(Dock::Status).default("AVAILABLE"))
                    .col(string_null(Dock::Location))
                    .col(text_null(Dock::Description))
                    .col(double_null(Dock::MaxBoatLength))
                    .col(double_null(Dock::Depth))
                    .col(integer_null(Dock::PowerAmperage))
                    .col(boolean(Dock::HasWater).default(true))
                    .col(boolean(Dock::HasSewage).default(false))
                    .col(boolean(Dock::HasFuel).default(false))
                    .col(json_null(Dock::Amenities))
                    .col(date_null(Dock::BuiltDate))
                    .col(date_null(Dock::LastMaintenanceDate))
                    .col(date_null(Dock::NextMaintenanceDate))
                    .col(integer_null(Dock::MaintenanceInterval))
                    .col(text_null(Dock::Notes))
                    .col(
                        timestamp_with_time_zone(Dock::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Dock::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dock {
    Table,
    Id,
    DockNumber,
    Name,
    Size,
    Status,
    Location,
    Description,
    MaxBoatLength,
    Depth,
    PowerAmperage,
    HasWater,
    HasSewage,
    HasFuel,
    Amenities,
    BuiltDate,
    LastMaintenanceDate,
    NextMaintenanceDate,
    MaintenanceInterval,
    Notes,
    CreatedAt,
    UpdatedAt,
}
