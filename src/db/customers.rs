//! Database queries for customers.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::entity::client;
use crate::entity::customer::{self, ActiveModel, Entity as Customer};
use crate::error::{AppError, AppResult};

use super::{DbPool, cascade};

impl DbPool {
    /// List all customers ordered by id.
    pub async fn list_customers(&self) -> AppResult<Vec<customer::Model>> {
        let result = Customer::find()
            .order_by_asc(customer::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list customers: {}", e)))?;

        Ok(result)
    }

    /// List the customers of one client ordered by id.
    pub async fn list_customers_by_client(&self, client_id: i32) -> AppResult<Vec<customer::Model>> {
        let result = Customer::find()
            .filter(customer::Column::ClientId.eq(client_id))
            .order_by_asc(customer::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list customers: {}", e)))?;

        Ok(result)
    }

    /// Get a customer by ID.
    pub async fn get_customer_by_id(&self, id: i32) -> AppResult<Option<customer::Model>> {
        let result = Customer::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get customer: {}", e)))?;

        Ok(result)
    }

    /// Insert a new customer.
    pub async fn insert_customer(&self, client_id: i32, name: String) -> AppResult<customer::Model> {
        let model = ActiveModel {
            client_id: Set(client_id),
            name: Set(name),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert customer: {}", e)))?;

        Ok(result)
    }

    /// Rename a customer.
    pub async fn update_customer(&self, id: i32, name: String) -> AppResult<customer::Model> {
        let customer = self
            .get_customer_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        let mut active: ActiveModel = customer.into();
        active.name = Set(name);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update customer: {}", e)))?;

        Ok(result)
    }

    /// Delete a customer with its filter plants, components and reports.
    pub async fn delete_customer(&self, id: i32) -> AppResult<()> {
        let txn = self.connection().begin().await?;

        Customer::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        cascade::delete_customers(&txn, &[id]).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Create an initial client and customer when no customer exists yet.
    ///
    /// Returns true when rows were inserted.
    pub async fn seed_initial_data(&self) -> AppResult<bool> {
        let txn = self.connection().begin().await?;

        if Customer::find().count(&txn).await? > 0 {
            return Ok(false);
        }

        let client = client::ActiveModel {
            name: Set("Initial Client".to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let customer = ActiveModel {
            client_id: Set(client.id),
            name: Set("Initial Customer".to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "Seeded initial client id={} and customer id={}",
            client.id, customer.id
        );
        Ok(true)
    }
}
