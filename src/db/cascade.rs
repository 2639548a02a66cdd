//! Ownership cascades.
//!
//! Every owned row is deleted by the application, children before parents,
//! inside the caller's transaction. The schema's foreign keys do not cascade.

use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter};
use tracing::debug;

use crate::entity::{client, component, customer, filter_plant, report, report_component};
use crate::error::AppResult;

/// Delete filter plants with their components, reports and line items.
pub async fn delete_filter_plants<C: ConnectionTrait>(db: &C, plant_ids: &[i32]) -> AppResult<()> {
    if plant_ids.is_empty() {
        return Ok(());
    }

    let report_ids: Vec<i32> = report::Entity::find()
        .filter(report::Column::FilterPlantId.is_in(plant_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    let component_ids: Vec<i32> = component::Entity::find()
        .filter(component::Column::FilterPlantId.is_in(plant_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    let items = report_component::Entity::delete_many()
        .filter(
            Condition::any()
                .add(report_component::Column::ReportId.is_in(report_ids))
                .add(report_component::Column::ComponentId.is_in(component_ids)),
        )
        .exec(db)
        .await?;

    let reports = report::Entity::delete_many()
        .filter(report::Column::FilterPlantId.is_in(plant_ids.to_vec()))
        .exec(db)
        .await?;

    let components = component::Entity::delete_many()
        .filter(component::Column::FilterPlantId.is_in(plant_ids.to_vec()))
        .exec(db)
        .await?;

    filter_plant::Entity::delete_many()
        .filter(filter_plant::Column::Id.is_in(plant_ids.to_vec()))
        .exec(db)
        .await?;

    debug!(
        "Deleted filter plants {:?} ({} components, {} reports, {} line items)",
        plant_ids, components.rows_affected, reports.rows_affected, items.rows_affected
    );

    Ok(())
}

/// Delete customers and everything they own.
pub async fn delete_customers<C: ConnectionTrait>(db: &C, customer_ids: &[i32]) -> AppResult<()> {
    if customer_ids.is_empty() {
        return Ok(());
    }

    let plant_ids: Vec<i32> = filter_plant::Entity::find()
        .filter(filter_plant::Column::CustomerId.is_in(customer_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    delete_filter_plants(db, &plant_ids).await?;

    // Reports always sit under one of the customer's plants, but the copied
    // customer_id is a foreign key of its own.
    let stray_report_ids: Vec<i32> = report::Entity::find()
        .filter(report::Column::CustomerId.is_in(customer_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    if !stray_report_ids.is_empty() {
        report_component::Entity::delete_many()
            .filter(report_component::Column::ReportId.is_in(stray_report_ids.clone()))
            .exec(db)
            .await?;
        report::Entity::delete_many()
            .filter(report::Column::Id.is_in(stray_report_ids))
            .exec(db)
            .await?;
    }

    customer::Entity::delete_many()
        .filter(customer::Column::Id.is_in(customer_ids.to_vec()))
        .exec(db)
        .await?;

    Ok(())
}

/// Delete a client and everything it owns.
pub async fn delete_client<C: ConnectionTrait>(db: &C, client_id: i32) -> AppResult<()> {
    let customer_ids: Vec<i32> = customer::Entity::find()
        .filter(customer::Column::ClientId.eq(client_id))
        .all(db)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    delete_customers(db, &customer_ids).await?;

    client::Entity::delete_by_id(client_id).exec(db).await?;

    Ok(())
}

/// Delete a component and the line items that reference it.
///
/// Reports that lose line items this way are kept.
pub async fn delete_component<C: ConnectionTrait>(db: &C, component_id: i32) -> AppResult<()> {
    report_component::Entity::delete_many()
        .filter(report_component::Column::ComponentId.eq(component_id))
        .exec(db)
        .await?;

    component::Entity::delete_by_id(component_id).exec(db).await?;

    Ok(())
}
