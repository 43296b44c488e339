use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(pk_auto(Asset::Id))
                    .col(string(Asset::Name))
                    .col(string(Asset::AssetType))
                    .col(string_null(Asset::Identifier))
                    .col(text_null(Asset::Description))
                    .col(string_null(Asset::Location))
                    .col(string(Asset::Status).default("OPERATIONAL"))
                    .col(date_null(Asset::PurchaseDate))
                    .col(double_null(Asset::PurchasePrice))
                    .col(date_null(Asset::WarrantyExpiration))
                    .col(integer_null(Asset::ExpectedLifespanYears))
                    .col(json_null(Asset::Specifications))
                    .col(integer_null(Asset::MaintenanceInterval))
                    .col(date_null(Asset::LastMaintenanceDate))
                    .col(date_null(Asset::NextMaintenanceDate))
                    .col(
                        timestamp_with_time_zone(Asset::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Asset::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asset::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Asset {
    Table,
    Id,
    Name,
    AssetType,
    Identifier,
    Description,
    Location,
    Status,
    PurchaseDate,
    PurchasePrice,
    WarrantyExpiration,
    ExpectedLifespanYears,
    Specifications,
    MaintenanceInterval,
    LastMaintenanceDate,
    NextMaintenanceDate,
    CreatedAt,
    UpdatedAt,
}
