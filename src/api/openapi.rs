//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OIS Reports API",
        version = "0.1.0",
        description = "Inspection reports for filter plants and their components"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::index,
        api::health::health,
        api::health::db_health,
        // Clients
        api::clients::list_clients,
        api::clients::create_client,
        api::clients::get_client,
        api::clients::update_client,
        api::clients::delete_client,
        api::clients::list_client_customers,
        // Customers
        api::customers::list_customers,
        api::customers::create_customer,
        api::customers::get_customer,
        api::customers::update_customer,
        api::customers::delete_customer,
        // Manufacturers
        api::manufacturers::list_manufacturers,
        api::manufacturers::create_manufacturer,
        api::manufacturers::get_manufacturer,
        api::manufacturers::list_manufacturer_filter_plants,
        // Filter plants
        api::filter_plants::list_customer_filter_plants,
        api::filter_plants::create_filter_plant,
        api::filter_plants::get_filter_plant,
        api::filter_plants::update_filter_plant,
        api::filter_plants::delete_filter_plant,
        // Components
        api::components::list_components,
        api::components::create_component,
        api::components::get_component,
        api::components::update_component,
        api::components::delete_component,
        // Reports
        api::reports::create_report,
        api::reports::list_reports,
        api::reports::list_customer_reports,
        api::reports::get_report,
        api::reports::update_report,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::IndexResponse,
            api::health::HealthResponse,
            api::health::DbHealthResponse,
            // Hierarchy
            models::Client,
            models::ClientRequest,
            models::Customer,
            models::CreateCustomerRequest,
            models::UpdateCustomerRequest,
            models::Manufacturer,
            models::CreateManufacturerRequest,
            models::FilterPlant,
            models::FilterPlantRequest,
            models::Component,
            models::ComponentRequest,
            // Reports
            models::ComponentDescription,
            models::CreateReportRequest,
            models::UpdateReportRequest,
            models::Report,
            models::ReportSummary,
            models::ReportComponentDetail,
            models::ReportDetail,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Clients", description = "Clients owning customers"),
        (name = "Customers", description = "Customers owning filter plants"),
        (name = "Manufacturers", description = "Filter plant manufacturers"),
        (name = "Filter Plants", description = "Filter plants owning components"),
        (name = "Components", description = "Inspectable parts of a filter plant"),
        (name = "Reports", description = "Inspection report lifecycle"),
    )
)]
pub struct ApiDoc;
