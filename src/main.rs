//! OIS Reports server entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ois_reports_lib::api::{self, ApiDoc};
use ois_reports_lib::config::Config;
use ois_reports_lib::db::DbPool;
use ois_reports_lib::middleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL or POSTGRES_* must point at a real database");
            error!("  - In production, OIS_CORS_ORIGINS must list at least one origin");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  OIS Reports Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::connect_with_retry(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(
                "Giving up on the database after {} attempts: {}",
                config.database.connect_retries, e
            );
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    if let Err(e) = pool.run_migrations().await {
        error!("{}", e);
        std::process::exit(1);
    }

    if config.seed_initial_data {
        match pool.seed_initial_data().await {
            Ok(true) => info!("Initial client and customer created"),
            Ok(false) => {}
            Err(e) => warn!("Failed to seed initial data: {}", e),
        }
    }

    let bind_address = config.bind_address();
    let origins = config.cors_allowed_origins.clone();
    info!("CORS allowed origins: {}", origins.join(", "));

    let worker_count = if config.is_development() {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };
    info!("API documentation at http://{}/docs/", bind_address);

    let server = HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        App::new()
            // CORS must wrap outermost
            .wrap(cors)
            .wrap(middleware::RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::json_config())
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(api::configure_routes)
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
