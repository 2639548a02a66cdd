//! Database module providing connection management, migrations, and queries.

pub mod cascade;
pub mod clients;
pub mod components;
pub mod customers;
pub mod filter_plants;
pub mod manufacturers;
pub mod reports;

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{info, warn};

use crate::config::{Config, DatabaseSettings};
use crate::error::{AppError, AppResult};
use crate::migration::{Migrator, MigratorTrait};

/// Database connection pool wrapper.
///
/// `DatabaseConnection` is itself a pool, so cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        Self::connect(&config.database).await
    }

    /// Open a pool with the given settings.
    pub async fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        let mut opts = ConnectOptions::new(settings.url.clone());
        opts.max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .sqlx_logging(false);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Open a pool, retrying once per second while the database is unreachable.
    pub async fn connect_with_retry(settings: &DatabaseSettings) -> AppResult<Self> {
        let attempts = settings.connect_retries.max(1);
        let mut attempt = 1;
        loop {
            match Self::connect(settings).await {
                Ok(pool) => return Ok(pool),
                Err(e) if attempt < attempts => {
                    warn!(
                        "Database not reachable (attempt {}/{}): {}",
                        attempt, attempts, e
                    );
                    attempt += 1;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending schema migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations complete");
        Ok(())
    }

    /// Run a trivial query to verify the database answers.
    pub async fn ping(&self) -> AppResult<()> {
        let backend = self.conn.get_database_backend();
        let stmt = Statement::from_string(backend, "SELECT 1".to_owned());
        self.conn.query_one_raw(stmt).await?;
        Ok(())
    }
}
