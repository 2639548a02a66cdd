//! Domain models and DTOs for the OIS Reports API.

pub mod client;
pub mod component;
pub mod customer;
pub mod filter_plant;
pub mod manufacturer;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use client::{Client, ClientRequest};
pub use component::{Component, ComponentRequest};
pub use customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
pub use filter_plant::{FilterPlant, FilterPlantRequest};
pub use manufacturer::{CreateManufacturerRequest, Manufacturer};
pub use report::{
    ComponentDescription, CreateReportRequest, LineItem, Report, ReportComponentDetail,
    ReportDetail, ReportSummary, UpdateReportRequest,
};
