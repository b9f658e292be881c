//! Shell configuration
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `CALLCENTER_*` environment variables (`CALLCENTER_UI__JSON=true`).
//! Only the console shell reads these; the store has no settings.

use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base name of the config file looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "callcenter";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CALLCENTER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Line printed when the shell starts
    pub banner: String,
    /// Colorize success and error lines
    pub color: bool,
    /// Render tickets as JSON instead of tables
    pub json: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner: "Call Center Ticket System".to_string(),
            color: true,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist; otherwise `callcenter.{toml,json,yaml}`
    /// in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
