//! Database queries for filter plants.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::entity::filter_plant::{self, ActiveModel, Entity as FilterPlant};
use crate::error::{AppError, AppResult};

use super::{DbPool, cascade};

/// Column values shared by insert and update.
#[derive(Debug, Clone)]
pub struct FilterPlantValues {
    pub manufacturer_id: i32,
    pub description: String,
    pub year_built: i32,
}

impl DbPool {
    /// List the filter plants of a customer ordered by id.
    pub async fn list_filter_plants_by_customer(
        &self,
        customer_id: i32,
    ) -> AppResult<Vec<filter_plant::Model>> {
        let result = FilterPlant::find()
            .filter(filter_plant::Column::CustomerId.eq(customer_id))
            .order_by_asc(filter_plant::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list filter plants: {}", e)))?;

        Ok(result)
    }

    /// List the filter plants built by a manufacturer ordered by id.
    pub async fn list_filter_plants_by_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> AppResult<Vec<filter_plant::Model>> {
        let result = FilterPlant::find()
            .filter(filter_plant::Column::ManufacturerId.eq(manufacturer_id))
            .order_by_asc(filter_plant::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list filter plants: {}", e)))?;

        Ok(result)
    }

    /// Get a filter plant by ID.
    pub async fn get_filter_plant_by_id(&self, id: i32) -> AppResult<Option<filter_plant::Model>> {
        let result = FilterPlant::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get filter plant: {}", e)))?;

        Ok(result)
    }

    /// Insert a new filter plant under a customer.
    pub async fn insert_filter_plant(
        &self,
        customer_id: i32,
        values: FilterPlantValues,
    ) -> AppResult<filter_plant::Model> {
        let model = ActiveModel {
            customer_id: Set(customer_id),
            manufacturer_id: Set(values.manufacturer_id),
            description: Set(values.description),
            year_built: Set(values.year_built),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert filter plant: {}", e)))?;

        Ok(result)
    }

    /// Update description, year and manufacturer. The owning customer never changes.
    pub async fn update_filter_plant(
        &self,
        id: i32,
        values: FilterPlantValues,
    ) -> AppResult<filter_plant::Model> {
        let plant = self
            .get_filter_plant_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

        let mut active: ActiveModel = plant.into();
        active.manufacturer_id = Set(values.manufacturer_id);
        active.description = Set(values.description);
        active.year_built = Set(values.year_built);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update filter plant: {}", e)))?;

        Ok(result)
    }

    /// Delete a filter plant with its components, reports and their line items.
    pub async fn delete_filter_plant(&self, id: i32) -> AppResult<()> {
        let txn = self.connection().begin().await?;

        FilterPlant::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

        cascade::delete_filter_plants(&txn, &[id]).await?;

        txn.commit().await?;
        Ok(())
    }
}
