//! OIS Reports server library.
//!
//! Inspection reports for customer filter plants: the client, customer,
//! filter plant and component hierarchy, and the report lifecycle on top of it.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
