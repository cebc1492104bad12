pub mod app;
pub mod database;

pub use app::{AppConfig, AppMetadata, ObservabilityConfig, ServerConfig};
pub use database::{DatabaseConfig, DatabaseDriver, PoolConfig};

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Every configuration section checks itself before the application starts
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
