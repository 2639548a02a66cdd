//! Manufacturer API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::validation::{MANUFACTURER_NAME_MAX_LEN, required_text};
use crate::models::{CreateManufacturerRequest, FilterPlant, Manufacturer};

/// List all manufacturers.
#[utoipa::path(
    get,
    path = "/manufacturers",
    tag = "Manufacturers",
    responses(
        (status = 200, description = "All manufacturers", body = [Manufacturer]),
    )
)]
pub async fn list_manufacturers(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let manufacturers: Vec<Manufacturer> = pool
        .list_manufacturers()
        .await?
        .into_iter()
        .map(Manufacturer::from)
        .collect();

    Ok(HttpResponse::Ok().json(manufacturers))
}

/// Create a manufacturer.
#[utoipa::path(
    post,
    path = "/manufacturers",
    tag = "Manufacturers",
    request_body = CreateManufacturerRequest,
    responses(
        (status = 201, description = "Manufacturer created", body = Manufacturer),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_manufacturer(
    pool: web::Data<DbPool>,
    body: web::Json<CreateManufacturerRequest>,
) -> AppResult<HttpResponse> {
    let name = required_text(&body.name, "Name", MANUFACTURER_NAME_MAX_LEN)?;
    let manufacturer = pool.insert_manufacturer(name).await?;

    info!("Manufacturer created: id={}", manufacturer.id);

    Ok(HttpResponse::Created().json(Manufacturer::from(manufacturer)))
}

/// Get a manufacturer.
#[utoipa::path(
    get,
    path = "/manufacturers/{manufacturer_id}",
    tag = "Manufacturers",
    params(("manufacturer_id" = i32, Path, description = "Manufacturer ID")),
    responses(
        (status = 200, description = "Manufacturer", body = Manufacturer),
        (status = 404, description = "Manufacturer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_manufacturer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let manufacturer = pool
        .get_manufacturer_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Manufacturer".to_string()))?;

    Ok(HttpResponse::Ok().json(Manufacturer::from(manufacturer)))
}

/// List the filter plants built by a manufacturer.
#[utoipa::path(
    get,
    path = "/manufacturers/{manufacturer_id}/filter-plants",
    tag = "Manufacturers",
    params(("manufacturer_id" = i32, Path, description = "Manufacturer ID")),
    responses(
        (status = 200, description = "Filter plants of the manufacturer", body = [FilterPlant]),
        (status = 404, description = "Manufacturer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_manufacturer_filter_plants(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let manufacturer_id = path.into_inner();
    pool.get_manufacturer_by_id(manufacturer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Manufacturer".to_string()))?;

    let plants: Vec<FilterPlant> = pool
        .list_filter_plants_by_manufacturer(manufacturer_id)
        .await?
        .into_iter()
        .map(FilterPlant::from)
        .collect();

    Ok(HttpResponse::Ok().json(plants))
}

/// Configure manufacturer routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/manufacturers")
            .route(web::get().to(list_manufacturers))
            .route(web::post().to(create_manufacturer)),
    )
    .service(
        web::resource("/manufacturers/{manufacturer_id}").route(web::get().to(get_manufacturer)),
    )
    .service(
        web::resource("/manufacturers/{manufacturer_id}/filter-plants")
            .route(web::get().to(list_manufacturer_filter_plants)),
    );
}
