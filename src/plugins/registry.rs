//! Plugin registry
//!
//! The [`PluginRegistry`] is the single point of discovery for sub-agents.
//! It is constructed by the host and passed to whatever loads plugins; there
//! is no process-wide instance. Plugins are kept in registration order.
//!
//! Registering an identity twice is rejected and leaves the first
//! registration in place.

use super::agent::{validate_agent, ActiveAgent, PluginAgent, PromptProvider, ToolProvider};
use super::descriptor::{AgentFactory, PluginDescriptor};
use crate::error::{ContractViolation, RegistrationError};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::{debug, info};

/// Allowed plugin identities
static IDENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("identity pattern is valid"));

/// Check a plugin identity
pub fn is_valid_identity(name: &str) -> bool {
    IDENTITY_PATTERN.is_match(name)
}

/// A plugin that passed registration
#[derive(Clone)]
pub struct RegisteredPlugin {
    name: String,
    description: String,
    version: String,
    registered_at: DateTime<Utc>,
    factory: AgentFactory,
}

impl RegisteredPlugin {
    /// Plugin identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Plugin version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// When the plugin was registered
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Build a fresh agent instance
    pub fn instantiate(&self) -> Box<dyn PluginAgent> {
        (self.factory)()
    }

    /// Build an agent and check it against the contract
    pub fn activate(&self) -> Result<ActiveAgent, ContractViolation> {
        let agent = self.instantiate();
        validate_agent(&self.name, agent.as_ref())?;

        Ok(ActiveAgent {
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            tools: agent.tools().to_vec(),
            system_prompt: agent.system_prompt().to_string(),
        })
    }
}

impl fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("registered_at", &self.registered_at)
            .finish()
    }
}

/// Table of registered plugins
#[derive(Default)]
pub struct PluginRegistry {
    plugins: IndexMap<String, RegisteredPlugin>,
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            plugins: IndexMap::new(),
        }
    }

    /// Register a plugin
    ///
    /// Fails without touching the table if the descriptor has no identity,
    /// an invalid identity, no agent, or an identity that is already taken.
    pub fn register(&mut self, descriptor: PluginDescriptor) -> Result<(), RegistrationError> {
        let PluginDescriptor {
            name,
            description,
            version,
            factory,
        } = descriptor;

        if name.trim().is_empty() {
            return Err(RegistrationError::MissingIdentity);
        }
        if !is_valid_identity(&name) {
            return Err(RegistrationError::InvalidIdentity(name));
        }
        let Some(factory) = factory else {
            return Err(RegistrationError::MissingAgent(name));
        };
        if self.plugins.contains_key(&name) {
            return Err(RegistrationError::Duplicate(name));
        }

        let plugin = RegisteredPlugin {
            name: name.clone(),
            description,
            version: version.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            registered_at: Utc::now(),
            factory,
        };

        debug!("Registered plugin '{}' v{}", plugin.name, plugin.version);
        self.plugins.insert(name, plugin);
        Ok(())
    }

    /// All plugins in registration order
    pub fn enumerate(&self) -> Vec<&RegisteredPlugin> {
        self.plugins.values().collect()
    }

    /// Iterate plugins in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins.values()
    }

    /// Get a plugin by identity
    pub fn get(&self, name: &str) -> Option<&RegisteredPlugin> {
        self.plugins.get(name)
    }

    /// Check if a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Identities in registration order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Activate a single plugin by identity
    pub fn activate(&self, name: &str) -> Option<Result<ActiveAgent, ContractViolation>> {
        self.get(name).map(RegisteredPlugin::activate)
    }

    /// Log the table contents
    pub fn log_summary(&self) {
        info!(
            "{} plugin(s) registered: {}",
            self.len(),
            self.names().join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::protocol::{ToolDefinition, ToolRequest, ToolResponse};
    use crate::plugins::tool::Tool;
    use std::sync::Arc;

    struct Ping;

    impl Tool for Ping {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("ping", "Reply with pong")
        }

        fn execute(&self, request: &ToolRequest) -> ToolResponse {
            ToolResponse::success_with_output(&request.id, serde_json::json!({}), "pong")
        }
    }

    struct PingAgent {
        tools: Vec<Arc<dyn Tool>>,
    }

    impl Default for PingAgent {
        fn default() -> Self {
            Self {
                tools: vec![Arc::new(Ping)],
            }
        }
    }

    impl ToolProvider for PingAgent {
        fn tools(&self) -> &[Arc<dyn Tool>] {
            &self.tools
        }
    }

    impl PromptProvider for PingAgent {
        fn system_prompt(&self) -> &str {
            "You answer pings"
        }
    }

    struct SilentAgent;

    impl ToolProvider for SilentAgent {
        fn tools(&self) -> &[Arc<dyn Tool>] {
            &[]
        }
    }

    impl PromptProvider for SilentAgent {
        fn system_prompt(&self) -> &str {
            ""
        }
    }

    fn ping(name: &str) -> PluginDescriptor {
        PluginDescriptor::new(name).with_agent::<PingAgent>()
    }

    #[test]
    fn test_identity_pattern() {
        assert!(is_valid_identity("myinfo_agent"));
        assert!(is_valid_identity("search-agent2"));
        assert!(!is_valid_identity("MyInfo"));
        assert!(!is_valid_identity("_hidden"));
        assert!(!is_valid_identity("with space"));
        assert!(!is_valid_identity(""));
    }

    #[test]
    fn test_register_and_enumerate_in_order() {
        let mut registry = PluginRegistry::new();
        for name in ["charlie", "alpha", "bravo"] {
            registry.register(ping(name)).unwrap();
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["charlie", "alpha", "bravo"]);

        let enumerated: Vec<&str> = registry.enumerate().iter().map(|p| p.name()).collect();
        assert_eq!(enumerated, vec!["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_distinct_identities_are_independent() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("one").with_description("first")).unwrap();
        registry.register(ping("two").with_description("second")).unwrap();

        assert_eq!(registry.get("one").unwrap().description(), "first");
        assert_eq!(registry.get("two").unwrap().description(), "second");
        assert!(registry.contains("one"));
        assert!(!registry.contains("three"));
    }

    #[test]
    fn test_duplicate_rejected_first_kept() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("dup").with_version("1.0.0")).unwrap();

        let err = registry
            .register(ping("dup").with_version("2.0.0"))
            .unwrap_err();

        assert_eq!(err, RegistrationError::Duplicate("dup".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("dup").unwrap().version(), "1.0.0");
    }

    #[test]
    fn test_missing_identity_leaves_registry_unchanged() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("existing")).unwrap();

        let err = registry
            .register(PluginDescriptor::new("").with_agent::<PingAgent>())
            .unwrap_err();

        assert_eq!(err, RegistrationError::MissingIdentity);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_agent_rejected() {
        let mut registry = PluginRegistry::new();
        let err = registry.register(PluginDescriptor::new("hollow")).unwrap_err();

        assert_eq!(err, RegistrationError::MissingAgent("hollow".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_identity_rejected() {
        let mut registry = PluginRegistry::new();
        let err = registry.register(ping("Not Valid")).unwrap_err();

        assert!(matches!(err, RegistrationError::InvalidIdentity(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_version() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("versionless")).unwrap();

        let plugin = registry.get("versionless").unwrap();
        assert_eq!(plugin.version(), env!("CARGO_PKG_VERSION"));
        assert!(plugin.registered_at() <= Utc::now());
    }

    #[test]
    fn test_instantiate_is_fresh_per_call() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("fresh")).unwrap();

        let plugin = registry.get("fresh").unwrap();
        let first = plugin.instantiate();
        let second = plugin.instantiate();

        assert!(!Arc::ptr_eq(&first.tools()[0], &second.tools()[0]));
        assert!(Arc::ptr_eq(&first.tools()[0], &first.tools()[0]));
    }

    #[test]
    fn test_activate() {
        let mut registry = PluginRegistry::new();
        registry.register(ping("pinger")).unwrap();
        registry
            .register(PluginDescriptor::new("silent").with_factory(|| SilentAgent))
            .unwrap();

        let active = registry.activate("pinger").unwrap().unwrap();
        assert_eq!(active.system_prompt, "You answer pings");
        assert_eq!(active.tools.len(), 1);

        let err = registry.activate("silent").unwrap().unwrap_err();
        assert_eq!(err.agent(), "silent");

        assert!(registry.activate("missing").is_none());
    }
}
