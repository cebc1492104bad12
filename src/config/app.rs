use serde::{Deserialize, Serialize};

use super::{ConfigError, DatabaseConfig, PoolConfig, Validate};

/// Top-level application configuration that aggregates all config sections
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// HTTP server configuration (bind address, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database target (driver, host, credentials)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Connection pool sizing and timeouts
    #[serde(default)]
    pub pool: PoolConfig,
    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Application environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Worker threads; 0 lets actix pick one per core
    #[serde(default)]
    pub workers: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log filter directive, e.g. "info" or "cine_magenta=debug,info"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_name() -> String {
    "cine-magenta".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: 0,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name cannot be empty".to_string(),
            ));
        }
        if self.version.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.version cannot be empty".to_string(),
            ));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.environment cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.is_empty() {
            return Err(ConfigError::ValidationError(
                "observability.log_level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate all nested configurations
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.pool.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: CINE_MAGENTA__SERVER__PORT=8080
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    // Determine the environment
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    // Build configuration with layered sources
    let config = Config::builder()
        // Layer 1: Base defaults
        .add_source(File::with_name("config/default").required(false))
        // Layer 2: Environment-specific overrides
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        // Layer 3: Local developer overrides (git-ignored)
        .add_source(File::with_name("config/local").required(false))
        // Layer 4: Environment variables (highest precedence)
        .add_source(Environment::with_prefix("CINE_MAGENTA").separator("__"))
        .build()?;

    // Deserialize into AppConfig
    let app_config: AppConfig = config.try_deserialize()?;

    // Validate the configuration
    app_config.validate()?;

    Ok(app_config)
}
