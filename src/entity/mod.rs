//! SeaORM entity definitions.

pub mod client;
pub mod component;
pub mod customer;
pub mod filter_plant;
pub mod manufacturer;
pub mod report;
pub mod report_component;
