//! Built-in plugins
//!
//! Sub-agents shipped with the crate. Each plugin module exposes a
//! `descriptor()`; [`builtin_descriptors`] is the explicit list the loader
//! registers.

pub mod myinfo_agent;
pub mod search_agent;

use super::descriptor::PluginDescriptor;

/// Descriptors of every built-in plugin, in registration order
pub fn builtin_descriptors() -> Vec<PluginDescriptor> {
    vec![myinfo_agent::descriptor(), search_agent::descriptor()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{AgentSet, PluginRegistry};

    #[test]
    fn test_builtin_names() {
        let names: Vec<String> = builtin_descriptors()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec![myinfo_agent::NAME, search_agent::NAME]);
    }

    #[test]
    fn test_builtins_register_and_activate() {
        let mut registry = PluginRegistry::new();
        for descriptor in builtin_descriptors() {
            registry.register(descriptor).unwrap();
        }

        let set = AgentSet::assemble(&registry);
        assert_eq!(set.len(), 2);
        assert!(set.excluded().is_empty());
        for agent in set.agents() {
            assert!(!agent.system_prompt.trim().is_empty());
            assert!(!agent.description.is_empty());
        }
    }
}
