//! Database queries for components.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::entity::component::{self, ActiveModel, Entity as Component};
use crate::error::{AppError, AppResult};

use super::{DbPool, cascade};

impl DbPool {
    /// List the components of a filter plant ordered by id.
    pub async fn list_components_by_filter_plant(
        &self,
        filter_plant_id: i32,
    ) -> AppResult<Vec<component::Model>> {
        let result = Component::find()
            .filter(component::Column::FilterPlantId.eq(filter_plant_id))
            .order_by_asc(component::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list components: {}", e)))?;

        Ok(result)
    }

    /// Get a component by ID.
    pub async fn get_component_by_id(&self, id: i32) -> AppResult<Option<component::Model>> {
        let result = Component::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get component: {}", e)))?;

        Ok(result)
    }

    /// Insert a new component under a filter plant.
    pub async fn insert_component(
        &self,
        filter_plant_id: i32,
        name: String,
    ) -> AppResult<component::Model> {
        let model = ActiveModel {
            filter_plant_id: Set(filter_plant_id),
            name: Set(name),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert component: {}", e)))?;

        Ok(result)
    }

    /// Rename a component.
    pub async fn update_component(&self, id: i32, name: String) -> AppResult<component::Model> {
        let component = self
            .get_component_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Component".to_string()))?;

        let mut active: ActiveModel = component.into();
        active.name = Set(name);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update component: {}", e)))?;

        Ok(result)
    }

    /// Delete a component and the report line items that reference it.
    pub async fn delete_component(&self, id: i32) -> AppResult<()> {
        let txn = self.connection().begin().await?;

        Component::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Component".to_string()))?;

        cascade::delete_component(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }
}
