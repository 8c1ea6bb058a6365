use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads `configuration.*` (optional), `APP__*` variables, then the bare
    /// `PORT` variable, later sources winning.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = env::var("PORT").ok().filter(|p| !p.trim().is_empty());

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_8000() {
        assert_eq!(Config::default().port, 8000);
    }

    #[test]
    fn string_port_deserializes() {
        let config = Cfg::builder()
            .set_override("port", "9123")
            .unwrap()
            .build()
            .unwrap();
        let parsed: Config = config.try_deserialize().unwrap();
        assert_eq!(parsed.port, 9123);
    }

    #[test]
    fn missing_port_falls_back_to_default() {
        let parsed: Config = Cfg::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(parsed.port, DEFAULT_PORT);
    }
}
