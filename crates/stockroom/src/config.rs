//! TOML configuration parsing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Optional JSON seed file: an array of creation payloads loaded into
    /// the store at startup.
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    /// Page size substituted when a request carries no `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Optional upper cap on `limit`. Absent means uncapped; the engine
    /// itself never imposes one.
    #[serde(default)]
    pub max_limit: Option<u64>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: None,
        }
    }
}

fn default_limit() -> u64 {
    stockroom_core::query::DEFAULT_LIMIT
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    if config.query.default_limit == 0 {
        anyhow::bail!("query.default_limit must be at least 1");
    }
    if let Some(max) = config.query.max_limit {
        if max < config.query.default_limit {
            anyhow::bail!(
                "query.max_limit ({}) must not be below query.default_limit ({})",
                max,
                config.query.default_limit
            );
        }
    }
    Ok(config)
}
