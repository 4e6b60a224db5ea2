//! Configuration loading and management
//!
//! Values come from, in increasing priority: built-in defaults, the YAML
//! file named by `CAFE_CONFIG`, then the `PORT`, `MONGO_URI` and
//! `CORS_ORIGIN` environment variables.

use crate::entities::order::StatusPolicy;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional YAML configuration file
pub const CONFIG_PATH_ENV: &str = "CAFE_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Allowed CORS origin, `*` for any
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origin: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which storage backend the server runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseBackend {
    #[default]
    InMemory,
    Mongodb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,

    /// MongoDB connection string
    pub uri: String,

    /// Database used when `uri` does not name one
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::InMemory,
            uri: "mongodb://localhost:27017".to_string(),
            name: "cafedb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// Rule set applied when an order's status changes
    pub status_policy: StatusPolicy,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub orders: OrdersConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Defaults, then `CAFE_CONFIG` if set, then environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with a custom variable lookup
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_from(lookup)
    }

    /// Apply `PORT`, `MONGO_URI` and `CORS_ORIGIN` overrides
    ///
    /// Setting `MONGO_URI` also selects the MongoDB backend.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("Invalid PORT '{}': {}", port, e))?;
        }

        if let Some(uri) = lookup("MONGO_URI") {
            if uri.trim().is_empty() {
                return Err(anyhow!("MONGO_URI is set but empty"));
            }
            self.database.uri = uri;
            self.database.backend = DatabaseBackend::Mongodb;
        }

        if let Some(origin) = lookup("CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }

        Ok(self)
    }
}
