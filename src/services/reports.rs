//! Report lifecycle: creation, replacement of line items, completion, and
//! the read projections.
//!
//! Every mutating call validates the whole request before its first write and
//! runs inside a single transaction.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::info;

use crate::db::{DbPool, reports as db};
use crate::entity::report;
use crate::error::{AppError, AppResult};
use crate::models::validation::{REPORT_DESCRIPTION_MAX_LEN, required_text};
use crate::models::{
    ComponentDescription, LineItem, Report, ReportComponentDetail, ReportDetail, ReportSummary,
};

/// Reject an empty description list.
pub fn ensure_descriptions_present(descriptions: &[ComponentDescription]) -> AppResult<()> {
    if descriptions.is_empty() {
        return Err(AppError::InvalidInput(
            "Component descriptions are required".to_string(),
        ));
    }
    Ok(())
}

/// Component ids in request order.
pub fn requested_component_ids(descriptions: &[ComponentDescription]) -> Vec<i32> {
    descriptions.iter().map(|d| d.component_id).collect()
}

/// Accept the selection only if every id is distinct and was found under the plant.
pub fn ensure_component_selection(requested: &[i32], found_in_plant: usize) -> AppResult<()> {
    let distinct: HashSet<i32> = requested.iter().copied().collect();
    if distinct.len() != requested.len() || found_in_plant != requested.len() {
        return Err(AppError::InvalidInput(
            "Invalid component selection".to_string(),
        ));
    }
    Ok(())
}

/// Trim and check each description in input order.
pub fn build_line_items(descriptions: &[ComponentDescription]) -> AppResult<Vec<LineItem>> {
    descriptions
        .iter()
        .map(|d| {
            Ok(LineItem {
                component_id: d.component_id,
                description: required_text(
                    &d.description,
                    "Description",
                    REPORT_DESCRIPTION_MAX_LEN,
                )?,
            })
        })
        .collect()
}

/// Run the list, selection and text checks against one filter plant.
async fn validate_descriptions<C: ConnectionTrait>(
    db: &C,
    filter_plant_id: i32,
    descriptions: &[ComponentDescription],
) -> AppResult<Vec<LineItem>> {
    ensure_descriptions_present(descriptions)?;

    let requested = requested_component_ids(descriptions);
    let found = db::count_plant_components(db, filter_plant_id, &requested).await?;
    ensure_component_selection(&requested, found)?;

    build_line_items(descriptions)
}

/// Create an open report for a filter plant owned by the customer.
pub async fn create_report(
    pool: &DbPool,
    customer_id: i32,
    filter_plant_id: i32,
    descriptions: &[ComponentDescription],
) -> AppResult<Report> {
    let txn = pool.connection().begin().await?;

    db::find_customer(&txn, customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    let plant = db::find_filter_plant(&txn, filter_plant_id)
        .await?
        .filter(|p| p.customer_id == customer_id)
        .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

    let items = validate_descriptions(&txn, plant.id, descriptions).await?;

    let report = db::insert_report(&txn, customer_id, plant.id).await?;
    db::insert_items(&txn, report.id, &items).await?;

    txn.commit().await?;

    info!(
        "Report created: id={}, customer_id={}, filter_plant_id={}, items={}",
        report.id,
        customer_id,
        plant.id,
        items.len()
    );

    Ok(report.into())
}

/// Replace the line items of an open report and set its completion flag.
pub async fn update_report(
    pool: &DbPool,
    report_id: i32,
    completed: bool,
    descriptions: &[ComponentDescription],
) -> AppResult<ReportDetail> {
    let txn = pool.connection().begin().await?;

    let report = db::find_report(&txn, report_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

    if report.completed {
        return Err(already_completed());
    }

    let items = validate_descriptions(&txn, report.filter_plant_id, descriptions).await?;

    // Claims the row before touching line items; a concurrent completion wins.
    if !db::set_completion_if_open(&txn, report.id, completed).await? {
        return Err(already_completed());
    }

    let removed = db::delete_items(&txn, report.id).await?;
    db::insert_items(&txn, report.id, &items).await?;

    let updated = report::Model {
        completed,
        ..report
    };
    let detail = load_detail(&txn, updated).await?;

    txn.commit().await?;

    info!(
        "Report updated: id={}, completed={}, items {} -> {}",
        report_id,
        completed,
        removed,
        items.len()
    );

    Ok(detail)
}

fn already_completed() -> AppError {
    AppError::InvalidState("Report is already completed".to_string())
}

/// All reports, newest first.
pub async fn list_reports(pool: &DbPool) -> AppResult<Vec<ReportSummary>> {
    let rows = db::list_reports(pool.connection(), None).await?;
    summarize(pool.connection(), rows).await
}

/// Reports of one customer, newest first. Unknown customers have none.
pub async fn list_customer_reports(
    pool: &DbPool,
    customer_id: i32,
) -> AppResult<Vec<ReportSummary>> {
    let rows = db::list_reports(pool.connection(), Some(customer_id)).await?;
    summarize(pool.connection(), rows).await
}

/// One report with its resolved line items.
pub async fn get_report_detail(pool: &DbPool, report_id: i32) -> AppResult<ReportDetail> {
    let report = db::find_report(pool.connection(), report_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

    load_detail(pool.connection(), report).await
}

async fn summarize<C: ConnectionTrait>(
    db: &C,
    rows: Vec<report::Model>,
) -> AppResult<Vec<ReportSummary>> {
    let customer_ids = unique(rows.iter().map(|r| r.customer_id));
    let plant_ids = unique(rows.iter().map(|r| r.filter_plant_id));

    let customers = db::customer_names(db, customer_ids).await?;
    let plants = db::filter_plant_descriptions(db, plant_ids).await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let customer_name = customers.get(&r.customer_id).map(String::as_str);
            let plant_description = plants.get(&r.filter_plant_id).map(String::as_str);
            ReportSummary::from_model(r, customer_name, plant_description)
        })
        .collect())
}

async fn load_detail<C: ConnectionTrait>(db: &C, report: report::Model) -> AppResult<ReportDetail> {
    let report_id = report.id;
    let summary = summarize(db, vec![report])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

    let items = db::find_items(db, report_id).await?;
    let names = db::component_names(db, unique(items.iter().map(|i| i.component_id))).await?;

    let components = items
        .into_iter()
        .map(|item| ReportComponentDetail {
            component_name: names.get(&item.component_id).cloned().unwrap_or_default(),
            component_id: item.component_id,
            description: item.description,
        })
        .collect();

    Ok(ReportDetail::new(summary, components))
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
