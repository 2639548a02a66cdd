//! Filter plant DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::filter_plant;

/// An installation owned by a customer and built by a manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterPlant {
    pub id: i32,
    pub customer_id: i32,
    pub manufacturer_id: i32,
    pub description: String,
    pub year_built: i32,
}

impl From<filter_plant::Model> for FilterPlant {
    fn from(m: filter_plant::Model) -> Self {
        FilterPlant {
            id: m.id,
            customer_id: m.customer_id,
            manufacturer_id: m.manufacturer_id,
            description: m.description,
            year_built: m.year_built,
        }
    }
}

/// Request body for creating or updating a filter plant.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FilterPlantRequest {
    pub description: String,
    /// Between 1800 and 2100 inclusive.
    pub year_built: i32,
    pub manufacturer_id: i32,
}
