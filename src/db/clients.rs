//! Database queries for clients.

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::entity::client::{self, ActiveModel, Entity as Client};
use crate::error::{AppError, AppResult};

use super::{DbPool, cascade};

impl DbPool {
    /// List all clients ordered by id.
    pub async fn list_clients(&self) -> AppResult<Vec<client::Model>> {
        let result = Client::find()
            .order_by_asc(client::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list clients: {}", e)))?;

        Ok(result)
    }

    /// Get a client by ID.
    pub async fn get_client_by_id(&self, id: i32) -> AppResult<Option<client::Model>> {
        let result = Client::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get client: {}", e)))?;

        Ok(result)
    }

    /// Insert a new client.
    pub async fn insert_client(&self, name: String) -> AppResult<client::Model> {
        let model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert client: {}", e)))?;

        Ok(result)
    }

    /// Rename a client.
    pub async fn update_client(&self, id: i32, name: String) -> AppResult<client::Model> {
        let client = self
            .get_client_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

        let mut active: ActiveModel = client.into();
        active.name = Set(name);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update client: {}", e)))?;

        Ok(result)
    }

    /// Delete a client together with its customers and everything below them.
    pub async fn delete_client(&self, id: i32) -> AppResult<()> {
        let txn = self.connection().begin().await?;

        Client::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

        cascade::delete_client(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }
}
