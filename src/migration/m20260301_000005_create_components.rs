//! Create components table.

use sea_orm_migration::prelude::*;

use super::m20260301_000004_create_filter_plants::FilterPlant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Component::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Component::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Component::FilterPlantId).integer().not_null())
                    .col(ColumnDef::new(Component::Name).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_components_filter_plant_id")
                            .from(Component::Table, Component::FilterPlantId)
                            .to(FilterPlant::Table, FilterPlant::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_components_filter_plant_id")
                    .table(Component::Table)
                    .col(Component::FilterPlantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Component::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Component {
    #[sea_orm(iden = "components")]
    Table,
    Id,
    FilterPlantId,
    Name,
}
