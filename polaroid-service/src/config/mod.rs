use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolaroidConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub store: StoreConfig,
    pub http: HttpConfig,
}

/// Document store settings. Both `url` and `database` must be present for
/// the service to connect; otherwise it runs without a store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub database: Option<String>,
    pub server_selection_timeout_secs: u64,
}

impl StoreConfig {
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            database: None,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl PolaroidConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;

        Ok(PolaroidConfig {
            common: common_config,
            store: StoreConfig {
                url: non_empty(env::var("DATABASE_URL").ok()),
                database: non_empty(env::var("DATABASE_NAME").ok()),
                server_selection_timeout_secs: parse_or(
                    "DATABASE_TIMEOUT_SECS",
                    env::var("DATABASE_TIMEOUT_SECS").ok(),
                    DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
                )?,
            },
            http: HttpConfig {
                max_body_bytes: parse_or(
                    "MAX_BODY_BYTES",
                    env::var("MAX_BODY_BYTES").ok(),
                    DEFAULT_MAX_BODY_BYTES,
                )?,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(raw) {
        None => Ok(default),
        Some(val) => val.trim().parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, val, e))
        }),
    }
}
