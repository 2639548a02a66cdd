//! Database queries for manufacturers.

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::entity::manufacturer::{self, ActiveModel, Entity as Manufacturer};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// List all manufacturers ordered by id.
    pub async fn list_manufacturers(&self) -> AppResult<Vec<manufacturer::Model>> {
        let result = Manufacturer::find()
            .order_by_asc(manufacturer::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list manufacturers: {}", e)))?;

        Ok(result)
    }

    /// Get a manufacturer by ID.
    pub async fn get_manufacturer_by_id(&self, id: i32) -> AppResult<Option<manufacturer::Model>> {
        let result = Manufacturer::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get manufacturer: {}", e)))?;

        Ok(result)
    }

    /// Insert a new manufacturer.
    pub async fn insert_manufacturer(&self, name: String) -> AppResult<manufacturer::Model> {
        let model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert manufacturer: {}", e)))?;

        Ok(result)
    }
}
