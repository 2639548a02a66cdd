//! HTTP API test suite.
//!
//! Every test runs the full route table against its own migrated in-memory
//! SQLite database, so no external services are needed.
//!
//! Run with: cargo test --test api

mod test_helpers;

mod test_health;
mod test_hierarchy;
mod test_reports;
