//! Report domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::report;

/// One inspected component and what was found, as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentDescription {
    pub component_id: i32,
    /// Trimmed before storage; 1 to 1000 characters.
    pub description: String,
}

/// Request body for creating a report.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReportRequest {
    pub component_descriptions: Vec<ComponentDescription>,
}

/// Request body for updating a report.
///
/// The line items are replaced wholesale. Setting `completed` to true freezes
/// the report.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReportRequest {
    pub completed: bool,
    pub component_descriptions: Vec<ComponentDescription>,
}

/// A validated line item ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub component_id: i32,
    pub description: String,
}

/// Report as returned by the create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: i32,
    pub customer_id: i32,
    pub filter_plant_id: i32,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

impl From<report::Model> for Report {
    fn from(m: report::Model) -> Self {
        Report {
            id: m.id,
            customer_id: m.customer_id,
            filter_plant_id: m.filter_plant_id,
            created_at: m.created_at,
            completed: m.completed,
        }
    }
}

/// Report list projection.
///
/// `customer_name` and `filter_plant_description` are resolved at read time
/// and fall back to an empty string when the owner cannot be found.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportSummary {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub filter_plant_id: i32,
    pub filter_plant_description: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

impl ReportSummary {
    /// Build a summary from a report row and whatever names could be resolved.
    pub fn from_model(
        m: report::Model,
        customer_name: Option<&str>,
        filter_plant_description: Option<&str>,
    ) -> Self {
        ReportSummary {
            id: m.id,
            customer_id: m.customer_id,
            customer_name: customer_name.unwrap_or_default().to_string(),
            filter_plant_id: m.filter_plant_id,
            filter_plant_description: filter_plant_description.unwrap_or_default().to_string(),
            created_at: m.created_at,
            completed: m.completed,
        }
    }
}

/// A line item with its component name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportComponentDetail {
    pub component_id: i32,
    /// Empty when the component no longer resolves.
    pub component_name: String,
    pub description: String,
}

/// Report detail projection: the summary fields plus ordered line items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDetail {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub filter_plant_id: i32,
    pub filter_plant_description: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
    pub components: Vec<ReportComponentDetail>,
}

impl ReportDetail {
    pub fn new(summary: ReportSummary, components: Vec<ReportComponentDetail>) -> Self {
        ReportDetail {
            id: summary.id,
            customer_id: summary.customer_id,
            customer_name: summary.customer_name,
            filter_plant_id: summary.filter_plant_id,
            filter_plant_description: summary.filter_plant_description,
            created_at: summary.created_at,
            completed: summary.completed,
            components,
        }
    }
}
