//! Plugin loader
//!
//! Registers an explicit list of plugin descriptors into a registry,
//! honouring the plugin configuration. A broken plugin is reported and
//! skipped; it never prevents the others from loading.

use super::descriptor::PluginDescriptor;
use super::registry::PluginRegistry;
use crate::config::PluginConfig;
use crate::error::RegistrationError;
use tracing::{debug, info, warn};

/// Outcome of a load pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Plugins registered, in order
    pub loaded: Vec<String>,
    /// Plugins left out by configuration
    pub skipped: Vec<String>,
    /// Names in `plugins.load` that no descriptor provides
    pub missing: Vec<String>,
    /// Plugins that failed to register
    pub failed: Vec<RegistrationError>,
}

impl LoadReport {
    /// Whether every selected plugin registered
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }
}

/// Loads plugin descriptors into a registry
pub struct PluginLoader {
    config: PluginConfig,
}

impl PluginLoader {
    /// Create a new plugin loader
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Register the selected descriptors
    pub fn load(
        &self,
        registry: &mut PluginRegistry,
        descriptors: Vec<PluginDescriptor>,
    ) -> LoadReport {
        let mut report = LoadReport::default();

        if !self.config.enabled {
            debug!("Plugins disabled in configuration");
            report.skipped = descriptors.iter().map(|d| d.name().to_string()).collect();
            return report;
        }

        for name in &self.config.load {
            if !descriptors.iter().any(|d| d.name() == name) {
                warn!("Configured plugin '{}' not found", name);
                report.missing.push(name.clone());
            }
        }

        for descriptor in descriptors {
            let name = descriptor.name().to_string();

            if !self.is_selected(&name) {
                debug!("Skipping plugin '{}'", name);
                report.skipped.push(name);
                continue;
            }

            match registry.register(descriptor) {
                Ok(()) => {
                    info!("Loaded plugin '{}'", name);
                    report.loaded.push(name);
                }
                Err(e) => {
                    warn!("Failed to load plugin '{}': {}", name, e);
                    report.failed.push(e);
                }
            }
        }

        report
    }

    /// Whether configuration lets a plugin through
    fn is_selected(&self, name: &str) -> bool {
        if self.config.disabled.iter().any(|d| d == name) {
            return false;
        }
        // Descriptors without an identity are always attempted so they fail loudly
        self.config.load.is_empty() || name.is_empty() || self.config.load.iter().any(|l| l == name)
    }
}
