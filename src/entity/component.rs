//! Component entity: a named part of a filter plant.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "components")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filter_plant_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::filter_plant::Entity",
        from = "Column::FilterPlantId",
        to = "super::filter_plant::Column::Id"
    )]
    FilterPlant,
    #[sea_orm(has_many = "super::report_component::Entity")]
    ReportComponents,
}

impl Related<super::filter_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilterPlant.def()
    }
}

impl Related<super::report_component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportComponents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
