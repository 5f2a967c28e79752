//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bstree/bstree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `BSTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cli::CliError;
use crate::domain::Order;

/// Unified configuration for bstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Traversal order printed when a command does not name one
    pub order: Order,
    /// Joins printed values
    pub separator: String,
    /// Rebalance every tree before printing it
    pub balance: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: Order::Preorder,
            separator: ", ".into(),
            balance: false,
        }
    }
}

/// Get the XDG config directory for bstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bstree.toml"))
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence (see module docs).
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        Self::load_from(global_config_path().as_deref(), explicit, true)
    }

    /// Load settings from the given files only.
    ///
    /// Missing files are skipped for the global layer; an explicit file
    /// must exist. `with_env` adds the `BSTREE_*` layer.
    #[instrument(level = "debug")]
    pub fn load_from(
        global: Option<&Path>,
        explicit: Option<&Path>,
        with_env: bool,
    ) -> Result<Self, CliError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("order", defaults.order.to_string())
            .map_err(config_err)?
            .set_default("separator", defaults.separator.clone())
            .map_err(config_err)?
            .set_default("balance", defaults.balance)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            builder = builder.add_source(File::from(global_path).required(false));
        }
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix("BSTREE"));
        }

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("render settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_as_toml() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("order = \"preorder\""));
        assert!(rendered.contains("balance = false"));
    }
}
