//! Report entity: an inspection record for one filter plant.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Copied from the filter plant at creation.
    pub customer_id: i32,
    pub filter_plant_id: i32,
    pub created_at: DateTimeUtc,
    /// Terminal once true.
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::filter_plant::Entity",
        from = "Column::FilterPlantId",
        to = "super::filter_plant::Column::Id"
    )]
    FilterPlant,
    #[sea_orm(has_many = "super::report_component::Entity")]
    Items,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::filter_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilterPlant.def()
    }
}

impl Related<super::report_component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
