//! Create report_components table (report line items).

use sea_orm_migration::prelude::*;

use super::m20260301_000005_create_components::Component;
use super::m20260301_000006_create_reports::Report;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportComponent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReportComponent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReportComponent::ReportId).integer().not_null())
                    .col(
                        ColumnDef::new(ReportComponent::ComponentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReportComponent::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_components_report_id")
                            .from(ReportComponent::Table, ReportComponent::ReportId)
                            .to(Report::Table, Report::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_components_component_id")
                            .from(ReportComponent::Table, ReportComponent::ComponentId)
                            .to(Component::Table, Component::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_report_components_report_id")
                    .table(ReportComponent::Table)
                    .col(ReportComponent::ReportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_report_components_component_id")
                    .table(ReportComponent::Table)
                    .col(ReportComponent::ComponentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportComponent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportComponent {
    #[sea_orm(iden = "report_components")]
    Table,
    Id,
    ReportId,
    ComponentId,
    Description,
}
