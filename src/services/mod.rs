//! Business logic services.

pub mod reports;
