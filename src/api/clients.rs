//! Client API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::validation::{NAME_MAX_LEN, required_text};
use crate::models::{Client, ClientRequest, Customer};

/// List all clients.
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "All clients", body = [Client]),
    )
)]
pub async fn list_clients(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let clients: Vec<Client> = pool
        .list_clients()
        .await?
        .into_iter()
        .map(Client::from)
        .collect();

    Ok(HttpResponse::Ok().json(clients))
}

/// Create a client.
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_client(
    pool: web::Data<DbPool>,
    body: web::Json<ClientRequest>,
) -> AppResult<HttpResponse> {
    let name = required_text(&body.name, "Name", NAME_MAX_LEN)?;
    let client = pool.insert_client(name).await?;

    info!("Client created: id={}", client.id);

    Ok(HttpResponse::Created().json(Client::from(client)))
}

/// Get a client.
#[utoipa::path(
    get,
    path = "/clients/{client_id}",
    tag = "Clients",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client", body = Client),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_client(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let client = pool
        .get_client_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

    Ok(HttpResponse::Ok().json(Client::from(client)))
}

/// Rename a client.
#[utoipa::path(
    patch,
    path = "/clients/{client_id}",
    tag = "Clients",
    params(("client_id" = i32, Path, description = "Client ID")),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_client(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<ClientRequest>,
) -> AppResult<HttpResponse> {
    let name = required_text(&body.name, "Name", NAME_MAX_LEN)?;
    let client = pool.update_client(path.into_inner(), name).await?;

    Ok(HttpResponse::Ok().json(Client::from(client)))
}

/// Delete a client and everything it owns.
#[utoipa::path(
    delete,
    path = "/clients/{client_id}",
    tag = "Clients",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_client(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let client_id = path.into_inner();
    pool.delete_client(client_id).await?;

    info!("Client deleted: id={}", client_id);

    Ok(HttpResponse::NoContent().finish())
}

/// List the customers of a client.
#[utoipa::path(
    get,
    path = "/clients/{client_id}/customers",
    tag = "Clients",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Customers of the client", body = [Customer]),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_client_customers(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let client_id = path.into_inner();
    pool.get_client_by_id(client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

    let customers: Vec<Customer> = pool
        .list_customers_by_client(client_id)
        .await?
        .into_iter()
        .map(Customer::from)
        .collect();

    Ok(HttpResponse::Ok().json(customers))
}

/// Configure client routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clients")
            .route(web::get().to(list_clients))
            .route(web::post().to(create_client)),
    )
    .service(
        web::resource("/clients/{client_id}")
            .route(web::get().to(get_client))
            .route(web::patch().to(update_client))
            .route(web::delete().to(delete_client)),
    )
    .service(
        web::resource("/clients/{client_id}/customers").route(web::get().to(list_client_customers)),
    );
}
