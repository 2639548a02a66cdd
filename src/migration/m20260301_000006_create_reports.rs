//! Create reports table.
//!
//! customer_id is copied from the filter plant so listings can be scoped without a join.

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_customers::Customer;
use super::m20260301_000004_create_filter_plants::FilterPlant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Report::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Report::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Report::FilterPlantId).integer().not_null())
                    .col(
                        ColumnDef::new(Report::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Report::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_customer_id")
                            .from(Report::Table, Report::CustomerId)
                            .to(Customer::Table, Customer::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_filter_plant_id")
                            .from(Report::Table, Report::FilterPlantId)
                            .to(FilterPlant::Table, FilterPlant::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_customer_id")
                    .table(Report::Table)
                    .col(Report::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_filter_plant_id")
                    .table(Report::Table)
                    .col(Report::FilterPlantId)
                    .to_owned(),
            )
            .await?;

        // Listings are newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_created_at")
                    .table(Report::Table)
                    .col(Report::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    #[sea_orm(iden = "reports")]
    Table,
    Id,
    CustomerId,
    FilterPlantId,
    CreatedAt,
    Completed,
}
