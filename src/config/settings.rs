//! Application settings loaded from `config.toml`, `.env` and the process environment.

use crate::config::database::{DEFAULT_DATABASE_URL, database_url_from_env};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Path used when `SERVICE_DESK_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Storage settings
    pub database: DatabaseConfig,
}

/// `[server]` table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

/// `[database]` table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Replaces file values with the ones given, when present.
    #[must_use]
    pub fn with_overrides(mut self, database_url: Option<String>, bind: Option<String>) -> Self {
        if let Some(url) = database_url {
            self.database.url = url;
        }
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        self
    }
}

/// Parses a TOML document into an [`AppConfig`]. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Resolves the full application configuration.
///
/// An explicit `SERVICE_DESK_CONFIG` file must exist; the default `config.toml`
/// is optional. `DATABASE_URL` and `BIND_ADDR` win over anything in the file.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file_config = match std::env::var("SERVICE_DESK_CONFIG") {
        Ok(path) => load_config(path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        Err(_) => {
            info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults.");
            AppConfig::default()
        }
    };

    Ok(file_config.with_overrides(database_url_from_env(), std::env::var("BIND_ADDR").ok()))
}
