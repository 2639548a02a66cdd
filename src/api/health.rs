//! Service index and health check endpoints.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::error::ErrorResponse;

/// Service index response.
#[derive(Serialize, ToSchema)]
pub struct IndexResponse {
    name: &'static str,
    version: &'static str,
    docs: &'static str,
}

/// Liveness response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
}

/// Database reachability response.
#[derive(Serialize, ToSchema)]
pub struct DbHealthResponse {
    status: &'static str,
    database: &'static str,
}

/// Service index.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service name and version", body = IndexResponse)
    )
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(IndexResponse {
        name: "OIS Reports API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs/",
    })
}

/// Liveness check.
///
/// Returns 200 while the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Database reachability check.
#[utoipa::path(
    get,
    path = "/db-health",
    tag = "Health",
    responses(
        (status = 200, description = "Database answers queries", body = DbHealthResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
#[get("/db-health")]
pub async fn db_health(pool: web::Data<DbPool>) -> HttpResponse {
    match pool.ping().await {
        Ok(()) => HttpResponse::Ok().json(DbHealthResponse {
            status: "ok",
            database: "reachable",
        }),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "DATABASE_UNAVAILABLE".to_string(),
                message: "Database connection failed".to_string(),
            })
        }
    }
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health).service(db_health);
}
