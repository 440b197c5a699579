//! echo-plugins - sub-agent plugins for the Echo conversational host
//!
//! Each plugin contributes an ordered set of tools and a system prompt that
//! together define one specialised sub-agent. The host owns orchestration;
//! this crate owns the plugin contract, the registry and the built-in
//! plugins.
//!
//! ```
//! use echo_plugins::config::Config;
//! use echo_plugins::plugins::{AgentSet, Tool};
//!
//! let (registry, report) = echo_plugins::load_builtin(&Config::default());
//! assert!(report.is_clean());
//!
//! let agents = AgentSet::assemble(&registry);
//! let myinfo = agents.get("myinfo_agent").unwrap();
//! assert_eq!(myinfo.tools[0].name(), "whoami");
//! ```

pub mod config;
pub mod error;
pub mod plugins;

pub use error::{ConfigError, ContractViolation, EchoError, RegistrationError, Result};

use config::Config;
use plugins::{builtin_descriptors, LoadReport, PluginLoader, PluginRegistry};

/// Build a registry holding the built-in plugins selected by `config`
pub fn load_builtin(config: &Config) -> (PluginRegistry, LoadReport) {
    let mut registry = PluginRegistry::new();
    let loader = PluginLoader::new(config.plugins.clone());
    let report = loader.load(&mut registry, builtin_descriptors());
    registry.log_summary();
    (registry, report)
}
