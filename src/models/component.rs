//! Component DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::component;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Component {
    pub id: i32,
    pub filter_plant_id: i32,
    pub name: String,
}

impl From<component::Model> for Component {
    fn from(m: component::Model) -> Self {
        Component {
            id: m.id,
            filter_plant_id: m.filter_plant_id,
            name: m.name,
        }
    }
}

/// Request body for creating or renaming a component.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ComponentRequest {
    pub name: String,
}
