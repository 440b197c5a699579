//! Active agent set
//!
//! Turns a populated registry into the agents the host can actually use.
//! Agents that break the contract are left out and reported.

use super::agent::ActiveAgent;
use super::registry::PluginRegistry;
use crate::error::ContractViolation;
use tracing::{debug, warn};

/// Agents that passed activation, in registry order
#[derive(Debug, Default, Clone)]
pub struct AgentSet {
    agents: Vec<ActiveAgent>,
    excluded: Vec<ContractViolation>,
}

impl AgentSet {
    /// Activate every registered plugin
    pub fn assemble(registry: &PluginRegistry) -> Self {
        let mut set = Self::default();

        for plugin in registry.iter() {
            match plugin.activate() {
                Ok(agent) => {
                    if agent.is_prompt_only() {
                        debug!("Agent '{}' offers no tools", agent.name);
                    }
                    set.agents.push(agent);
                }
                Err(e) => {
                    warn!("Excluding agent '{}': {}", plugin.name(), e);
                    set.excluded.push(e);
                }
            }
        }

        set
    }

    /// Active agents
    pub fn agents(&self) -> &[ActiveAgent] {
        &self.agents
    }

    /// Agents left out, with the reason
    pub fn excluded(&self) -> &[ContractViolation] {
        &self.excluded
    }

    /// Get an active agent by plugin identity
    pub fn get(&self, name: &str) -> Option<&ActiveAgent> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Number of active agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agent is active
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
