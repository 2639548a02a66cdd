//! Client DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::client;

/// A client owning one or more customers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Client {
    pub id: i32,
    pub name: String,
}

impl From<client::Model> for Client {
    fn from(m: client::Model) -> Self {
        Client {
            id: m.id,
            name: m.name,
        }
    }
}

/// Request body for creating or renaming a client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClientRequest {
    pub name: String,
}
