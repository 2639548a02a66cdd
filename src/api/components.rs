//! Component API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::validation::{NAME_MAX_LEN, required_text};
use crate::models::{Component, ComponentRequest};

/// List the components of a filter plant.
#[utoipa::path(
    get,
    path = "/filter-plants/{filter_plant_id}/components",
    tag = "Components",
    params(("filter_plant_id" = i32, Path, description = "Filter plant ID")),
    responses(
        (status = 200, description = "Components of the filter plant", body = [Component]),
        (status = 404, description = "Filter plant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_components(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let filter_plant_id = path.into_inner();
    pool.get_filter_plant_by_id(filter_plant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

    let components: Vec<Component> = pool
        .list_components_by_filter_plant(filter_plant_id)
        .await?
        .into_iter()
        .map(Component::from)
        .collect();

    Ok(HttpResponse::Ok().json(components))
}

/// Create a component under a filter plant.
#[utoipa::path(
    post,
    path = "/filter-plants/{filter_plant_id}/components",
    tag = "Components",
    params(("filter_plant_id" = i32, Path, description = "Filter plant ID")),
    request_body = ComponentRequest,
    responses(
        (status = 201, description = "Component created", body = Component),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Filter plant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_component(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<ComponentRequest>,
) -> AppResult<HttpResponse> {
    let filter_plant_id = path.into_inner();
    pool.get_filter_plant_by_id(filter_plant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Filter plant".to_string()))?;

    let name = required_text(&body.name, "Name", NAME_MAX_LEN)?;
    let component = pool.insert_component(filter_plant_id, name).await?;

    info!(
        "Component created: id={}, filter_plant_id={}",
        component.id, filter_plant_id
    );

    Ok(HttpResponse::Created().json(Component::from(component)))
}

/// Get a component.
#[utoipa::path(
    get,
    path = "/components/{component_id}",
    tag = "Components",
    params(("component_id" = i32, Path, description = "Component ID")),
    responses(
        (status = 200, description = "Component", body = Component),
        (status = 404, description = "Component not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_component(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let component = pool
        .get_component_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Component".to_string()))?;

    Ok(HttpResponse::Ok().json(Component::from(component)))
}

/// Rename a component.
#[utoipa::path(
    patch,
    path = "/components/{component_id}",
    tag = "Components",
    params(("component_id" = i32, Path, description = "Component ID")),
    request_body = ComponentRequest,
    responses(
        (status = 200, description = "Component updated", body = Component),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Component not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_component(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<ComponentRequest>,
) -> AppResult<HttpResponse> {
    let name = required_text(&body.name, "Name", NAME_MAX_LEN)?;
    let component = pool.update_component(path.into_inner(), name).await?;

    Ok(HttpResponse::Ok().json(Component::from(component)))
}

/// Delete a component. Reports keep their other line items.
#[utoipa::path(
    delete,
    path = "/components/{component_id}",
    tag = "Components",
    params(("component_id" = i32, Path, description = "Component ID")),
    responses(
        (status = 204, description = "Component deleted"),
        (status = 404, description = "Component not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_component(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let component_id = path.into_inner();
    pool.delete_component(component_id).await?;

    info!("Component deleted: id={}", component_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Configure component routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/filter-plants/{filter_plant_id}/components")
            .route(web::get().to(list_components))
            .route(web::post().to(create_component)),
    )
    .service(
        web::resource("/components/{component_id}")
            .route(web::get().to(get_component))
            .route(web::patch().to(update_component))
            .route(web::delete().to(delete_component)),
    );
}
