//! Filter plant API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::db::filter_plants::FilterPlantValues;
use crate::error::{AppError, AppResult};
use crate::models::validation::{
    FILTER_PLANT_DESCRIPTION_MAX_LEN, required_text, validate_year_built,
};
use crate::models::{FilterPlant, FilterPlantRequest};

/// Check the payload in order: description, year, then manufacturer.
async fn validate_request(pool: &DbPool, req: FilterPlantRequest) -> AppResult<FilterPlantValues> {
    let description = required_text(
        &req.description,
        "Description",
        FILTER_PLANT_DESCRIPTION_MAX_LEN,
    )?;
    let year_built = validate_year_built(req.year_built)?;

    pool.get_manufacturer_by_id(req.manufacturer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Manufacturer".to_string()))?;

    Ok(FilterPlantValues {
        manufacturer_id: req.manufacturer_id,
        description,
        year_built,
    })
}

/// List the filter plants of a customer.
#[utoipa::path(
    get,
    path = "/customers/{customer_id}/filter-plants",
    tag = "Filter Plants",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Filter plants of the customer", body = [FilterPlant]),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_customer_filter_plants(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let customer_id = path.into_inner();
    pool.get_customer_by_id(customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    let plants: Vec<FilterPlant> = pool
        .list_filter_plants_by_customer(customer_id)
        .await?
        .into_iter()
        .map(FilterPlant::from)
        .collect();

    Ok(HttpResponse::Ok().json(plants))
}

/// Create a filter plant under a customer.
#[utoipa::path(
    post,
    path = "/customers/{customer_id}/filter-plants",
    tag = "Filter Plants",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = FilterPlantRequest,
    responses(
        (status = 201, description = "Filter plant created", body = FilterPlant),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer or manufacturer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_filter_plant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<FilterPlantRequest>,
) -> AppResult<HttpResponse> {
    let customer_id = path.into_inner();
    pool.get_customer_by_id(customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    let values = validate_request(&pool, body.into_inner()).await?;
    let plant = pool.insert_filter_plant(customer_id, values).await?;

    info!(
        "Filter plant created: id={}, customer_id={}, manufacturer_id={}",
        plant.id, plant.customer_id, plant.manufacturer_id
    );

    Ok(HttpResponse::Created().json(FilterPlant::from(plant)))
}

/// Get a filter plant.
#[utoipa::path(
    get,
    path = "/filter-plants/{filter_plant_id}",
    tag = "Filter Plants",
    params(("filter_plant_id" = i32, Path, description = "Filter plant ID")),
    responses(
        (status = 200, description = "Filter plant", body = FilterPlant),
        (status = 404, description = "Filter plant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_filter_plant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let plant = pool
        .get_filter_plant_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

    Ok(HttpResponse::Ok().json(FilterPlant::from(plant)))
}

/// Update a filter plant's description, year and manufacturer.
#[utoipa::path(
    patch,
    path = "/filter-plants/{filter_plant_id}",
    tag = "Filter Plants",
    params(("filter_plant_id" = i32, Path, description = "Filter plant ID")),
    request_body = FilterPlantRequest,
    responses(
        (status = 200, description = "Filter plant updated", body = FilterPlant),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Filter plant or manufacturer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_filter_plant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<FilterPlantRequest>,
) -> AppResult<HttpResponse> {
    let filter_plant_id = path.into_inner();
    pool.get_filter_plant_by_id(filter_plant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

    let values = validate_request(&pool, body.into_inner()).await?;
    let plant = pool.update_filter_plant(filter_plant_id, values).await?;

    Ok(HttpResponse::Ok().json(FilterPlant::from(plant)))
}

/// Delete a filter plant with its components and reports.
#[utoipa::path(
    delete,
    path = "/filter-plants/{filter_plant_id}",
    tag = "Filter Plants",
    params(("filter_plant_id" = i32, Path, description = "Filter plant ID")),
    responses(
        (status = 204, description = "Filter plant deleted"),
        (status = 404, description = "Filter plant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_filter_plant(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let filter_plant_id = path.into_inner();
    pool.delete_filter_plant(filter_plant_id).await?;

    info!("Filter plant deleted: id={}", filter_plant_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Configure filter plant routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers/{customer_id}/filter-plants")
            .route(web::get().to(list_customer_filter_plants))
            .route(web::post().to(create_filter_plant)),
    )
    .service(
        web::resource("/filter-plants/{filter_plant_id}")
            .route(web::get().to(get_filter_plant))
            .route(web::patch().to(update_filter_plant))
            .route(web::delete().to(delete_filter_plant)),
    );
}
