//! Customer API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::validation::{NAME_MAX_LEN, required_text};
use crate::models::{CreateCustomerRequest, Customer, UpdateCustomerRequest};

/// List all customers.
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
    )
)]
pub async fn list_customers(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let customers: Vec<Customer> = pool
        .list_customers()
        .await?
        .into_iter()
        .map(Customer::from)
        .collect();

    Ok(HttpResponse::Ok().json(customers))
}

/// Create a customer under an existing client.
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCustomerRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    pool.get_client_by_id(req.client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

    let name = required_text(&req.name, "Name", NAME_MAX_LEN)?;
    let customer = pool.insert_customer(req.client_id, name).await?;

    info!(
        "Customer created: id={}, client_id={}",
        customer.id, customer.client_id
    );

    Ok(HttpResponse::Created().json(Customer::from(customer)))
}

/// Get a customer.
#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let customer = pool
        .get_customer_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    Ok(HttpResponse::Ok().json(Customer::from(customer)))
}

/// Rename a customer.
#[utoipa::path(
    patch,
    path = "/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateCustomerRequest>,
) -> AppResult<HttpResponse> {
    let name = required_text(&body.name, "Name", NAME_MAX_LEN)?;
    let customer = pool.update_customer(path.into_inner(), name).await?;

    Ok(HttpResponse::Ok().json(Customer::from(customer)))
}

/// Delete a customer with its filter plants and reports.
#[utoipa::path(
    delete,
    path = "/customers/{customer_id}",
    tag = "Customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let customer_id = path.into_inner();
    pool.delete_customer(customer_id).await?;

    info!("Customer deleted: id={}", customer_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers")
            .route(web::get().to(list_customers))
            .route(web::post().to(create_customer)),
    )
    .service(
        web::resource("/customers/{customer_id}")
            .route(web::get().to(get_customer))
            .route(web::patch().to(update_customer))
            .route(web::delete().to(delete_customer)),
    );
}
