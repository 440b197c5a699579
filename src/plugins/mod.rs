//! Plugin system for echo-plugins
//!
//! A plugin is an identity plus an agent factory. The agent contributes an
//! ordered tool list and a system prompt. Plugins are registered explicitly
//! into a [`PluginRegistry`] owned by the host; [`builtin_descriptors`]
//! lists the plugins shipped with this crate.

mod agent;
mod assembly;
mod descriptor;
mod loader;
mod protocol;
mod registry;
mod tool;

pub mod builtin;

pub use agent::{validate_agent, ActiveAgent, AgentSummary, PluginAgent, PromptProvider, ToolProvider};
pub use assembly::AgentSet;
pub use builtin::builtin_descriptors;
pub use descriptor::{AgentFactory, PluginDescriptor};
pub use loader::{LoadReport, PluginLoader};
pub use protocol::{ParameterDef, ToolDefinition, ToolRequest, ToolResponse};
pub use registry::{is_valid_identity, PluginRegistry, RegisteredPlugin};
pub use tool::Tool;
