//! API endpoint modules.

pub mod clients;
pub mod components;
pub mod customers;
pub mod filter_plants;
pub mod health;
pub mod manufacturers;
pub mod openapi;
pub mod reports;

use actix_web::{HttpRequest, error::JsonPayloadError, web};

use crate::error::AppError;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;

/// Register every resource route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(clients::configure_routes)
        .configure(customers::configure_routes)
        .configure(manufacturers::configure_routes)
        .configure(filter_plants::configure_routes)
        .configure(components::configure_routes)
        .configure(reports::configure_routes);
}

/// JSON extractor settings; malformed bodies become `INVALID_INPUT` responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(err.to_string()).into()
}
