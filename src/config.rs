//! Client configuration.
//!
//! Resolution order for the service address: `ECHONOTES_API_URL` in the
//! environment, then the JSON config file, then the built-in default.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

const ENV_API_URL: &str = "ECHONOTES_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_DIR: &str = "echonotes";
const CONFIG_FILE: &str = "config.json";

/// Settings read from `<config_dir>/echonotes/config.json`. Every field is
/// optional; a missing or malformed file degrades to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Load from the config file, if present.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring malformed config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("could not read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Service base URL with any trailing slash trimmed.
    pub fn effective_base_url(&self) -> String {
        resolve_base_url(env::var(ENV_API_URL).ok(), self.base_url.as_deref())
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

fn resolve_base_url(env_value: Option<String>, configured: Option<&str>) -> String {
    let url = env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(|v| v.to_string()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim().trim_end_matches('/').to_string()
}
