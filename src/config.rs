//! Application configuration
//!
//! Loaded from a TOML file (default: `~/.config/catalog-service/config.toml`,
//! overridable via the `CATALOG_CONFIG` env var). Every section has defaults
//! so the service starts with no config file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::SortMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported sort mode '{0}' (supported: price-descending)")]
    UnsupportedSortMode(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub host: String,
    /// Port for the REST API
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Database URL (e.g., "sqlite://./catalog.db?mode=rwc")
    pub url: String,
}

impl DatabaseSection {
    /// Connection URL, with `DATABASE_URL` taking precedence over the file.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./catalog.db?mode=rwc".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "catalog_service=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Catalog behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Listing sort mode. Sole recognized value: "price-descending"
    pub sort_by: String,
}

impl CatalogConfig {
    /// Resolve the configured sort mode, rejecting unknown names.
    pub fn sort_mode(&self) -> Result<SortMode, ConfigError> {
        SortMode::parse(&self.sort_by)
            .ok_or_else(|| ConfigError::UnsupportedSortMode(self.sort_by.clone()))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sort_by: SortMode::PriceDescending.to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        // Fail fast on an unusable sort mode instead of at the first request
        config.catalog.sort_mode()?;
        Ok(config)
    }
}

/// Default config file location: `~/.config/catalog-service/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catalog-service")
        .join("config.toml")
}
