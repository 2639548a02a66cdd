//! Create filter_plants table.
//!
//! Filter plants are owned by a customer and reference the manufacturer that built them.

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_customers::Customer;
use super::m20260301_000003_create_manufacturers::Manufacturer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilterPlant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FilterPlant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FilterPlant::CustomerId).integer().not_null())
                    .col(ColumnDef::new(FilterPlant::ManufacturerId).integer().not_null())
                    .col(
                        ColumnDef::new(FilterPlant::Description)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FilterPlant::YearBuilt).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_filter_plants_customer_id")
                            .from(FilterPlant::Table, FilterPlant::CustomerId)
                            .to(Customer::Table, Customer::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_filter_plants_manufacturer_id")
                            .from(FilterPlant::Table, FilterPlant::ManufacturerId)
                            .to(Manufacturer::Table, Manufacturer::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_filter_plants_customer_id")
                    .table(FilterPlant::Table)
                    .col(FilterPlant::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_filter_plants_manufacturer_id")
                    .table(FilterPlant::Table)
                    .col(FilterPlant::ManufacturerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilterPlant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FilterPlant {
    #[sea_orm(iden = "filter_plants")]
    Table,
    Id,
    CustomerId,
    ManufacturerId,
    Description,
    YearBuilt,
}
