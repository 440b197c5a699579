//! Plugin descriptors
//!
//! A descriptor is what a plugin module hands to the registry: an identity,
//! some metadata, and a factory producing the plugin's agent.

use super::agent::PluginAgent;
use std::fmt;
use std::sync::Arc;

/// Produces a fresh agent instance
pub type AgentFactory = Arc<dyn Fn() -> Box<dyn PluginAgent> + Send + Sync>;

/// Unvalidated description of a plugin
///
/// Built by the plugin author and consumed by
/// [`PluginRegistry::register`](super::registry::PluginRegistry::register),
/// which rejects descriptors without an identity or an agent.
#[derive(Clone, Default)]
pub struct PluginDescriptor {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) version: Option<String>,
    pub(crate) factory: Option<AgentFactory>,
}

impl PluginDescriptor {
    /// Start a descriptor for the given identity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Plugin version (defaults to the crate version)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Use `A::default()` to build each agent instance
    pub fn with_agent<A>(self) -> Self
    where
        A: PluginAgent + Default + 'static,
    {
        self.with_factory(A::default)
    }

    /// Use a closure to build each agent instance
    pub fn with_factory<A, F>(mut self, factory: F) -> Self
    where
        A: PluginAgent + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        let boxed: AgentFactory = Arc::new(move || Box::new(factory()) as Box<dyn PluginAgent>);
        self.factory = Some(boxed);
        self
    }

    /// Plugin identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether an agent factory has been supplied
    pub fn has_agent(&self) -> bool {
        self.factory.is_some()
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("version", &self.version)
            .field("has_agent", &self.has_agent())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::agent::{PromptProvider, ToolProvider};
    use crate::plugins::tool::Tool;

    #[derive(Default)]
    struct PromptOnly;

    impl ToolProvider for PromptOnly {
        fn tools(&self) -> &[Arc<dyn Tool>] {
            &[]
        }
    }

    impl PromptProvider for PromptOnly {
        fn system_prompt(&self) -> &str {
            "prompt only"
        }
    }

    #[test]
    fn test_builder() {
        let descriptor = PluginDescriptor::new("prompt_only")
            .with_description("Answers from the prompt alone")
            .with_version("1.2.3")
            .with_agent::<PromptOnly>();

        assert_eq!(descriptor.name(), "prompt_only");
        assert_eq!(descriptor.description(), "Answers from the prompt alone");
        assert_eq!(descriptor.version.as_deref(), Some("1.2.3"));
        assert!(descriptor.has_agent());
    }

    #[test]
    fn test_missing_agent() {
        let descriptor = PluginDescriptor::new("empty");
        assert!(!descriptor.has_agent());
        assert!(format!("{:?}", descriptor).contains("has_agent: false"));
    }

    #[test]
    fn test_factory_builds_agent() {
        let descriptor = PluginDescriptor::new("closure").with_factory(|| PromptOnly);
        let factory = descriptor.factory.unwrap();
        let agent = factory();
        assert_eq!(agent.system_prompt(), "prompt only");
        assert!(agent.tools().is_empty());
    }
}
