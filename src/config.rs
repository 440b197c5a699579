//! Configuration management for echo-plugins
//!
//! Handles loading and merging configuration from multiple sources:
//! 1. Compiled defaults
//! 2. User config (~/.echo/config.toml)
//! 3. Config file given on the command line
//! 4. Environment variables

use crate::error::ConfigError;
use crate::plugins::is_valid_identity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding a comma-separated allow list
pub const ENV_LOAD: &str = "ECHO_PLUGINS_LOAD";
/// Environment variable holding a comma-separated deny list
pub const ENV_DISABLED: &str = "ECHO_PLUGINS_DISABLED";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plugins: PluginConfig,
}

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Enable plugins
    pub enabled: bool,
    /// Specific plugins to load (empty = all built-in plugins)
    pub load: Vec<String>,
    /// Plugins that are never loaded
    pub disabled: Vec<String>,
}

/// One configuration source; keys left unset keep the earlier value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    plugins: PluginLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct PluginLayer {
    enabled: Option<bool>,
    load: Option<Vec<String>>,
    disabled: Option<Vec<String>>,
}

impl PluginLayer {
    /// Reject a source that both allows and denies the same plugin
    fn check(&self, source: &str) -> Result<(), ConfigError> {
        let (Some(load), Some(disabled)) = (&self.load, &self.disabled) else {
            return Ok(());
        };
        match load.iter().find(|name| disabled.contains(*name)) {
            Some(name) => Err(ConfigError::Invalid(format!(
                "{}: plugin '{}' is both in plugins.load and plugins.disabled",
                source, name
            ))),
            None => Ok(()),
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            load: vec![],
            disabled: vec![],
        }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load(cli_config: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                debug!("Loading user config from {:?}", user_config);
                config.merge_from_file(&user_config)?;
            }
        }

        if let Some(path) = cli_config {
            debug!("Loading CLI config from {:?}", path);
            config.merge_from_file(path)?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Default location of the user config file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".echo/config.toml"))
    }

    /// Merge configuration from a file
    fn merge_from_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let layer: ConfigLayer = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        layer.plugins.check(&path.display().to_string())?;
        self.merge(layer);
        Ok(())
    }

    /// Merge a later source into this one (the layer takes precedence)
    fn merge(&mut self, layer: ConfigLayer) {
        let PluginLayer {
            enabled,
            load,
            disabled,
        } = layer.plugins;

        if let Some(enabled) = enabled {
            self.plugins.enabled = enabled;
        }
        if let Some(load) = load {
            // A later allow overrides an earlier deny
            self.plugins.disabled.retain(|name| !load.contains(name));
            self.plugins.load = load;
        }
        if let Some(disabled) = disabled {
            self.plugins.disabled = disabled;
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let plugins = PluginLayer {
            enabled: None,
            load: std::env::var(ENV_LOAD).ok().map(|v| split_list(&v)),
            disabled: std::env::var(ENV_DISABLED).ok().map(|v| split_list(&v)),
        };
        plugins.check("environment")?;
        self.merge(ConfigLayer { plugins });
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.plugins.load.iter().chain(&self.plugins.disabled) {
            if !is_valid_identity(name) {
                return Err(ConfigError::Invalid(format!(
                    "'{}' is not a valid plugin identity",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
