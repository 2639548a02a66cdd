//! Customer DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::customer;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
}

impl From<customer::Model> for Customer {
    fn from(m: customer::Model) -> Self {
        Customer {
            id: m.id,
            client_id: m.client_id,
            name: m.name,
        }
    }
}

/// Request body for creating a customer under an existing client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub client_id: i32,
    pub name: String,
}

/// Request body for renaming a customer. The owning client cannot change.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: String,
}
