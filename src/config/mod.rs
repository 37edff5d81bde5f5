//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `SCOR_READINESS` prefix
//! and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use scor_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storage backend: {:?}", config.storage.backend);
//! ```

mod database;
mod error;
mod export;
mod server;
mod storage;
mod webhook;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults except `database`, which is only read when
/// the storage backend is `postgres`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// PostgreSQL connection, required for the `postgres` backend
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `SCOR_READINESS__*` variables:
    ///
    /// - `SCOR_READINESS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SCOR_READINESS__STORAGE__BACKEND=postgres` -> `storage.backend`
    /// - `SCOR_READINESS__DATABASE__URL=...` -> `database.url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCOR_READINESS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        match (&self.storage.backend, &self.database) {
            (StorageBackend::Postgres, None) => {
                return Err(ValidationError::MissingRequired("database.url"));
            }
            (_, Some(database)) => database.validate()?,
            _ => {}
        }
        self.webhook.validate()?;
        self.export.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
