//! Manufacturer entity. Referenced by filter plants, never owned.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manufacturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::filter_plant::Entity")]
    FilterPlants,
}

impl Related<super::filter_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilterPlants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
