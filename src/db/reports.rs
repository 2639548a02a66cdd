//! Report queries.
//!
//! These are free functions over any `ConnectionTrait` so the report service
//! can run its reads and writes inside one transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::{component, customer, filter_plant, report, report_component};
use crate::error::{AppError, AppResult};
use crate::models::LineItem;

pub async fn find_report<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<report::Model>> {
    report::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get report: {}", e)))
}

pub async fn find_customer<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<customer::Model>> {
    customer::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get customer: {}", e)))
}

pub async fn find_filter_plant<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<filter_plant::Model>> {
    filter_plant::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get filter plant: {}", e)))
}

/// Return how many of `component_ids` are components of the given plant.
///
/// Each id is counted once, so a duplicated id makes the count fall short of
/// the input length.
pub async fn count_plant_components<C: ConnectionTrait>(
    db: &C,
    filter_plant_id: i32,
    component_ids: &[i32],
) -> AppResult<usize> {
    if component_ids.is_empty() {
        return Ok(0);
    }

    let found = component::Entity::find()
        .filter(component::Column::FilterPlantId.eq(filter_plant_id))
        .filter(component::Column::Id.is_in(component_ids.to_vec()))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to look up components: {}", e)))?;

    Ok(found.len())
}

/// Insert an open report stamped with the current time.
pub async fn insert_report<C: ConnectionTrait>(
    db: &C,
    customer_id: i32,
    filter_plant_id: i32,
) -> AppResult<report::Model> {
    let model = report::ActiveModel {
        customer_id: Set(customer_id),
        filter_plant_id: Set(filter_plant_id),
        created_at: Set(Utc::now()),
        completed: Set(false),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert report: {}", e)))
}

/// Insert line items for a report in the given order.
pub async fn insert_items<C: ConnectionTrait>(
    db: &C,
    report_id: i32,
    items: &[LineItem],
) -> AppResult<()> {
    if items.is_empty() {
        return Ok(());
    }

    let models = items.iter().map(|item| report_component::ActiveModel {
        report_id: Set(report_id),
        component_id: Set(item.component_id),
        description: Set(item.description.clone()),
        ..Default::default()
    });

    report_component::Entity::insert_many(models)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert report components: {}", e)))?;

    Ok(())
}

/// Remove every line item of a report.
pub async fn delete_items<C: ConnectionTrait>(db: &C, report_id: i32) -> AppResult<u64> {
    let result = report_component::Entity::delete_many()
        .filter(report_component::Column::ReportId.eq(report_id))
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete report components: {}", e)))?;

    Ok(result.rows_affected)
}

/// Write the completion flag only while the report is still open.
///
/// Returns false when no row matched, which means the report was completed
/// (or removed) after it was read.
pub async fn set_completion_if_open<C: ConnectionTrait>(
    db: &C,
    report_id: i32,
    completed: bool,
) -> AppResult<bool> {
    let result = report::Entity::update_many()
        .col_expr(report::Column::Completed, Expr::value(completed))
        .filter(report::Column::Id.eq(report_id))
        .filter(report::Column::Completed.eq(false))
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update report: {}", e)))?;

    Ok(result.rows_affected == 1)
}

/// List reports newest first, optionally restricted to one customer.
pub async fn list_reports<C: ConnectionTrait>(
    db: &C,
    customer_id: Option<i32>,
) -> AppResult<Vec<report::Model>> {
    let mut query = report::Entity::find();
    if let Some(customer_id) = customer_id {
        query = query.filter(report::Column::CustomerId.eq(customer_id));
    }

    query
        .order_by_desc(report::Column::CreatedAt)
        .order_by_desc(report::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list reports: {}", e)))
}

/// Line items of a report in insertion order.
pub async fn find_items<C: ConnectionTrait>(
    db: &C,
    report_id: i32,
) -> AppResult<Vec<report_component::Model>> {
    report_component::Entity::find()
        .filter(report_component::Column::ReportId.eq(report_id))
        .order_by_asc(report_component::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get report components: {}", e)))
}

pub async fn customer_names<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> AppResult<HashMap<i32, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = customer::Entity::find()
        .filter(customer::Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get customers: {}", e)))?;

    Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
}

pub async fn filter_plant_descriptions<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> AppResult<HashMap<i32, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = filter_plant::Entity::find()
        .filter(filter_plant::Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get filter plants: {}", e)))?;

    Ok(rows.into_iter().map(|p| (p.id, p.description)).collect())
}

pub async fn component_names<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> AppResult<HashMap<i32, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = component::Entity::find()
        .filter(component::Column::Id.is_in(ids))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get components: {}", e)))?;

    Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
}
