//! # nq-configs
//!
//! Layered application configuration: built-in defaults, overridden by
//! `NQ__`-prefixed environment variables (`NQ__SERVER__PORT=9000`), with a
//! plain `GEMINI_API_KEY` accepted as a convenience for the one secret.
//! The binary calls `dotenvy::dotenv()` before loading, so a local `.env`
//! participates too.

use std::path::PathBuf;

use config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the three JSON state files.
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct GeminiConfig {
    /// Absent key is legal: the AI features then run unconfigured and the
    /// app degrades to a non-personalized experience.
    pub api_key: Option<SecretString>,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let raw = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("store.data_dir", "./data")?
            .set_default("gemini.model", "gemini-3-flash-preview")?
            .add_source(
                Environment::with_prefix("NQ")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        let mut cfg: AppConfig = raw.try_deserialize()?;

        if cfg.gemini.api_key.is_none() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                if !key.is_empty() {
                    debug!("using GEMINI_API_KEY from environment");
                    cfg.gemini.api_key = Some(SecretString::from(key));
                }
            }
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_environment() {
        let cfg = AppConfig::load().expect("defaults are complete");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.data_dir, PathBuf::from("./data"));
        assert_eq!(cfg.gemini.model, "gemini-3-flash-preview");
    }
}
