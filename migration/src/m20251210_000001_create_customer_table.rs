use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::FirstName))
                    .col(string(Customer::LastName))
                    .col(string_uniq(Customer::Email))
                    .col(string_null(Customer::Phone))
                    .col(string_null(Customer::Address))
                    .col(string(Customer::MembershipTier).default("BASIC"))
                    .col(integer(Customer::LoyaltyPoints).default(0))
                    .col(json_null(Customer::Preferences))
                    .col(text_null(Customer::Notes))
                    .col(
                        timestamp_with_time_zone(Customer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Customer::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    MembershipTier,
    LoyaltyPoints,
    Preferences,
    Notes,
    CreatedAt,
    UpdatedAt,
}
