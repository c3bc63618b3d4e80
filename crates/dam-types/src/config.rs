// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DamError, DamResult};
use crate::params::DamParameters;

/// Top-level application configuration.
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Starting parameter set for `compute` before file/flag overrides.
    #[serde(default)]
    pub defaults: DamParameters,
}

/// Simulation record storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON document holding all simulation records (default: simulations.json)
    #[serde(default = "default_store_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error (default: info)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_store_path() -> String {
    "simulations.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_store_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Load from a `.toml` or `.json` file, selected by extension.
    pub fn from_file(path: &str) -> DamResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let config: Self = match extension.as_deref() {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            _ => {
                return Err(DamError::ConfigError(format!(
                    "unsupported config format for '{path}' (expected .toml or .json)"
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DamResult<()> {
        if self.store.path.trim().is_empty() {
            return Err(DamError::ConfigError("store.path is empty".to_string()));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(DamError::ConfigError(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }
        self.defaults.validate()
    }
}
