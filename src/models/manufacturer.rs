//! Manufacturer DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::manufacturer;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
}

impl From<manufacturer::Model> for Manufacturer {
    fn from(m: manufacturer::Model) -> Self {
        Manufacturer {
            id: m.id,
            name: m.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateManufacturerRequest {
    /// At most 100 characters after trimming.
    pub name: String,
}
