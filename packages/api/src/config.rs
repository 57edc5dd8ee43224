//! Runtime configuration, read once from the environment at startup.

use std::fmt;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GAMES_TABLE: &str = "games";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Unknown or missing names fall back to development.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => AppEnv::Production,
            Some("development") | None => AppEnv::Development,
            Some(other) => {
                warn!(
                    "Env \"{}\" does not exist! Falling back to default config",
                    other
                );
                AppEnv::Development
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    DynamoDb { table_name: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidStorageBackend(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "Invalid APP_PORT: {}", value),
            ConfigError::InvalidStorageBackend(value) => {
                write!(f, "Invalid APP_STORAGE_BACKEND: {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let host = lookup("APP_HOST").unwrap_or_else(|| match env {
            AppEnv::Development => "localhost".to_string(),
            AppEnv::Production => "0.0.0.0".to_string(),
        });

        let port = match lookup("APP_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let backend = lookup("APP_STORAGE_BACKEND").unwrap_or_else(|| match env {
            AppEnv::Development => "memory".to_string(),
            AppEnv::Production => "dynamodb".to_string(),
        });
        let storage = match backend.as_str() {
            "memory" => StorageBackend::Memory,
            "dynamodb" => StorageBackend::DynamoDb {
                table_name: lookup("GAMES_TABLE")
                    .unwrap_or_else(|| DEFAULT_GAMES_TABLE.to_string()),
            },
            _ => return Err(ConfigError::InvalidStorageBackend(backend)),
        };

        Ok(Config {
            env,
            host,
            port,
            storage,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
