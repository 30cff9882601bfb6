//! Server configuration: TOML file plus environment overrides.
//!
//! Resolution order (later wins): built-in defaults, the first config file
//! found (or the explicitly requested one), environment variables. A `.env`
//! file is loaded by `main` before any of this runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["galleria.toml", "config/galleria.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins; a single `"*"` entry means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost:5432/galleria".to_string(),
                max_connections: 8,
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

/// Partial config as read from disk; absent keys keep earlier values.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: FileServerConfig,
    #[serde(default)]
    database: FileDatabaseConfig,
    #[serde(default)]
    cors: FileCorsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileServerConfig {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDatabaseConfig {
    url: Option<String>,
    max_connections: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct FileCorsConfig {
    allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(file) = self.read_file_config()? {
            apply_file(&mut config, file);
        }
        apply_env(&mut config, |key| std::env::var(key).ok())?;

        validate(&config)?;
        Ok(config)
    }

    fn read_file_config(&self) -> Result<Option<FileConfig>, ConfigError> {
        let path = match &self.config_path {
            // An explicitly requested file must exist.
            Some(path) => path.clone(),
            None => {
                match DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .map(Path::new)
                    .find(|p| p.exists())
                {
                    Some(path) => path.to_path_buf(),
                    None => return Ok(None),
                }
            }
        };

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let parsed =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(parsed))
    }
}

fn apply_file(config: &mut Config, file: FileConfig) {
    if let Some(host) = file.server.host {
        config.server.host = host;
    }
    if let Some(port) = file.server.port {
        config.server.port = port;
    }
    if let Some(url) = file.database.url {
        config.database.url = url;
    }
    if let Some(max) = file.database.max_connections {
        config.database.max_connections = max;
    }
    if let Some(origins) = file.cors.allowed_origins {
        config.cors.allowed_origins = origins;
    }
}

fn apply_env(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(host) = lookup("GALLERIA_HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("GALLERIA_PORT") {
        config.server.port = port.parse().map_err(|_| ConfigError::Invalid {
            field: "GALLERIA_PORT",
            reason: format!("not a port number: {port}"),
        })?;
    }
    if let Some(url) = lookup("DATABASE_URL") {
        config.database.url = url;
    }
    if let Some(max) = lookup("GALLERIA_DB_MAX_CONNECTIONS") {
        config.database.max_connections =
            max.parse().map_err(|_| ConfigError::Invalid {
                field: "GALLERIA_DB_MAX_CONNECTIONS",
                reason: format!("not a number: {max}"),
            })?;
    }
    if let Some(origins) = lookup("GALLERIA_CORS_ORIGINS") {
        config.cors.allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.database.url).map_err(|e| ConfigError::Invalid {
        field: "database.url",
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "postgres" | "postgresql") {
        return Err(ConfigError::Invalid {
            field: "database.url",
            reason: format!("unsupported scheme: {}", url.scheme()),
        });
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::Invalid {
            field: "database.max_connections",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
