//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod database;
pub mod folder;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::folder::FolderConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides (`FOLDERTREE__SERVER__PORT`).
const ENV_PREFIX: &str = "FOLDERTREE";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Folder tree limits.
    #[serde(default)]
    pub folders: FolderConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{env}.toml`, `FOLDERTREE__*` variables, and finally the
    /// conventional `DATABASE_URL` and `PORT` variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the settings that have no usable default.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "Database URL is not set (use DATABASE_URL or FOLDERTREE__DATABASE__URL)",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::configuration(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        if self.folders.max_depth == 0 {
            return Err(AppError::configuration("folders.max_depth must be at least 1"));
        }
        Ok(())
    }
}
