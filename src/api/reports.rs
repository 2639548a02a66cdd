//! Report API handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreateReportRequest, Report, ReportDetail, ReportSummary, UpdateReportRequest};
use crate::services::reports as service;

/// Path parameters for report creation.
#[derive(Debug, Deserialize)]
pub struct PlantReportPath {
    pub customer_id: i32,
    pub filter_plant_id: i32,
}

/// Create a report for one of the customer's filter plants.
#[utoipa::path(
    post,
    path = "/customers/{customer_id}/filter-plants/{filter_plant_id}/reports",
    tag = "Reports",
    params(
        ("customer_id" = i32, Path, description = "Customer ID"),
        ("filter_plant_id" = i32, Path, description = "Filter plant ID, must belong to the customer")
    ),
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report created", body = Report),
        (status = 400, description = "Invalid descriptions or component selection", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer or filter plant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_report(
    pool: web::Data<DbPool>,
    path: web::Path<PlantReportPath>,
    body: web::Json<CreateReportRequest>,
) -> AppResult<HttpResponse> {
    let path = path.into_inner();
    let report = service::create_report(
        &pool,
        path.customer_id,
        path.filter_plant_id,
        &body.component_descriptions,
    )
    .await?;

    Ok(HttpResponse::Created().json(report))
}

/// List all reports, newest first.
#[utoipa::path(
    get,
    path = "/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "All reports", body = [ReportSummary]),
    )
)]
pub async fn list_reports(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let reports = service::list_reports(&pool).await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// List the reports of a customer, newest first.
///
/// An unknown customer yields an empty list.
#[utoipa::path(
    get,
    path = "/customers/{customer_id}/reports",
    tag = "Reports",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Reports of the customer", body = [ReportSummary]),
    )
)]
pub async fn list_customer_reports(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let reports = service::list_customer_reports(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// Get a report with its line items.
#[utoipa::path(
    get,
    path = "/reports/{report_id}",
    tag = "Reports",
    params(("report_id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report detail", body = ReportDetail),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_report(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let detail = service::get_report_detail(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Replace a report's line items and set its completion flag.
///
/// Completed reports reject every update.
#[utoipa::path(
    patch,
    path = "/reports/{report_id}",
    tag = "Reports",
    params(("report_id" = i32, Path, description = "Report ID")),
    request_body = UpdateReportRequest,
    responses(
        (status = 200, description = "Report updated", body = ReportDetail),
        (status = 400, description = "Invalid input or report already completed", body = crate::error::ErrorResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_report(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateReportRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let detail = service::update_report(
        &pool,
        path.into_inner(),
        req.completed,
        &req.component_descriptions,
    )
    .await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// Configure report routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers/{customer_id}/filter-plants/{filter_plant_id}/reports")
            .route(web::post().to(create_report)),
    )
    .service(
        web::resource("/customers/{customer_id}/reports")
            .route(web::get().to(list_customer_reports)),
    )
    .service(web::resource("/reports").route(web::get().to(list_reports)))
    .service(
        web::resource("/reports/{report_id}")
            .route(web::get().to(get_report))
            .route(web::patch().to(update_report)),
    );
}
