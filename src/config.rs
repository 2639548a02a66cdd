//! Application configuration loaded from environment variables.

use std::env;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8000;
    pub const DEV_POSTGRES_USER: &str = "ois";
    pub const DEV_POSTGRES_PASSWORD: &str = "ois";
    pub const DEV_POSTGRES_HOST: &str = "localhost";
    pub const DEV_POSTGRES_PORT: u16 = 5432;
    pub const DEV_POSTGRES_DB: &str = "ois_reports";
    pub const DEV_CORS_ORIGIN: &str = "http://localhost:4200";

    pub const DB_MAX_CONNECTIONS: u32 = 10;
    pub const DB_MIN_CONNECTIONS: u32 = 1;
    pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;
    pub const DB_CONNECT_RETRIES: u32 = 10;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// Connection string (postgres:// or sqlite:)
    pub url: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// Seconds to wait when acquiring a connection
    pub connect_timeout_secs: u64,
    /// Startup attempts before giving up on an unreachable database
    pub connect_retries: u32,
}

impl DatabaseSettings {
    /// Settings for a throwaway in-memory SQLite database.
    ///
    /// A single connection keeps every query on the same in-memory database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: defaults::DB_CONNECT_TIMEOUT_SECS,
            connect_retries: 1,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database connection settings
    pub database: DatabaseSettings,
    /// Origins allowed by CORS
    pub cors_allowed_origins: Vec<String>,
    /// Seed an initial client and customer when the database has no customers
    pub seed_initial_data: bool,
}

/// Build a PostgreSQL connection string from its parts.
pub fn build_database_url(user: &str, password: &str, host: &str, port: u16, db: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, db)
}

/// The connection string used when nothing is configured.
pub fn dev_database_url() -> String {
    build_database_url(
        defaults::DEV_POSTGRES_USER,
        defaults::DEV_POSTGRES_PASSWORD,
        defaults::DEV_POSTGRES_HOST,
        defaults::DEV_POSTGRES_PORT,
        defaults::DEV_POSTGRES_DB,
    )
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `OIS_HOST`: Server host (default: 127.0.0.1)
    /// - `OIS_PORT`: Server port (default: 8000)
    /// - `DATABASE_URL`: Full connection string. When unset it is composed from
    ///   `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST`, `POSTGRES_PORT`
    ///   and `POSTGRES_DB`.
    /// - `OIS_DB_MAX_CONNECTIONS`: Pool size (default: 10)
    /// - `OIS_DB_MIN_CONNECTIONS`: Idle connections kept open (default: 1)
    /// - `OIS_DB_CONNECT_TIMEOUT_SECS`: Acquire timeout (default: 30)
    /// - `OIS_DB_CONNECT_RETRIES`: Startup connection attempts (default: 10)
    /// - `OIS_CORS_ORIGINS`: Comma-separated allowed origins (default: http://localhost:4200)
    /// - `OIS_SEED_INITIAL_DATA`: Seed initial client/customer (default: true in development)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Parse environment - required
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("OIS_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("OIS_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("OIS_PORT must be a valid port number"))?;

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let pg_port = env::var("POSTGRES_PORT")
                    .unwrap_or_else(|_| defaults::DEV_POSTGRES_PORT.to_string())
                    .parse::<u16>()
                    .map_err(|_| {
                        ConfigError::InvalidValue("POSTGRES_PORT must be a valid port number")
                    })?;
                build_database_url(
                    &env::var("POSTGRES_USER")
                        .unwrap_or_else(|_| defaults::DEV_POSTGRES_USER.to_string()),
                    &env::var("POSTGRES_PASSWORD")
                        .unwrap_or_else(|_| defaults::DEV_POSTGRES_PASSWORD.to_string()),
                    &env::var("POSTGRES_HOST")
                        .unwrap_or_else(|_| defaults::DEV_POSTGRES_HOST.to_string()),
                    pg_port,
                    &env::var("POSTGRES_DB")
                        .unwrap_or_else(|_| defaults::DEV_POSTGRES_DB.to_string()),
                )
            }
        };

        let max_connections = env::var("OIS_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| defaults::DB_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue("OIS_DB_MAX_CONNECTIONS must be a valid number"))?;

        let min_connections = env::var("OIS_DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| defaults::DB_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue("OIS_DB_MIN_CONNECTIONS must be a valid number"))?;

        let connect_timeout_secs = env::var("OIS_DB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DB_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("OIS_DB_CONNECT_TIMEOUT_SECS must be a valid number")
            })?;

        let connect_retries = env::var("OIS_DB_CONNECT_RETRIES")
            .unwrap_or_else(|_| defaults::DB_CONNECT_RETRIES.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue("OIS_DB_CONNECT_RETRIES must be a valid number"))?;

        let cors_allowed_origins = parse_origins(
            &env::var("OIS_CORS_ORIGINS").unwrap_or_else(|_| defaults::DEV_CORS_ORIGIN.to_string()),
        );

        let seed_initial_data = match env::var("OIS_SEED_INITIAL_DATA") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue(
                "OIS_SEED_INITIAL_DATA must be true or false",
            ))?,
            Err(_) => environment.is_development(),
        };

        let config = Config {
            environment,
            host,
            port,
            database: DatabaseSettings {
                url: database_url,
                max_connections,
                min_connections,
                connect_timeout_secs,
                connect_retries,
            },
            cors_allowed_origins,
            seed_initial_data,
        };

        config.validate()?;

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate settings that apply to every environment.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "OIS_DB_MAX_CONNECTIONS must be greater than zero",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::InvalidValue(
                "OIS_DB_MIN_CONNECTIONS must not exceed OIS_DB_MAX_CONNECTIONS",
            ));
        }
        Ok(())
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database.url == dev_database_url() {
            errors.push(
                "DATABASE_URL is using the development default. Set a production PostgreSQL URL."
                    .to_string(),
            );
        }

        if self.database.url.starts_with("sqlite:") {
            errors.push("DATABASE_URL must point to PostgreSQL in production.".to_string());
        }

        if self.cors_allowed_origins.is_empty() {
            errors.push("OIS_CORS_ORIGINS must list at least one origin.".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
