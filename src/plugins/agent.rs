//! Plugin agent capability contract
//!
//! A sub-agent is anything that can provide tools and a system prompt. The
//! two capabilities are separate traits; [`PluginAgent`] is their union and
//! is implemented automatically for every type that has both.

use super::protocol::ToolDefinition;
use super::tool::Tool;
use crate::error::ContractViolation;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Supplies the tools an agent offers.
pub trait ToolProvider {
    /// Ordered tool list.
    ///
    /// Must return the same tools in the same order on every call for a
    /// given instance. An empty slice means the agent is prompt-only.
    fn tools(&self) -> &[Arc<dyn Tool>];
}

/// Supplies the system-level instruction that frames an agent.
pub trait PromptProvider {
    /// Non-empty system prompt.
    fn system_prompt(&self) -> &str;
}

/// A sub-agent that can take part in the host's orchestration.
pub trait PluginAgent: ToolProvider + PromptProvider + Send + Sync {}

impl<T> PluginAgent for T where T: ToolProvider + PromptProvider + Send + Sync {}

/// Check an agent instance against the plugin contract.
pub fn validate_agent(name: &str, agent: &dyn PluginAgent) -> Result<(), ContractViolation> {
    if agent.system_prompt().trim().is_empty() {
        return Err(ContractViolation::EmptyPrompt {
            agent: name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (index, tool) in agent.tools().iter().enumerate() {
        let definition = tool.definition();
        if definition.name.trim().is_empty() {
            return Err(ContractViolation::UnnamedTool {
                agent: name.to_string(),
                index,
            });
        }
        if definition.parameters.iter().any(|p| p.name.trim().is_empty()) {
            return Err(ContractViolation::UnnamedParameter {
                agent: name.to_string(),
                tool: definition.name,
            });
        }
        if !seen.insert(definition.name.clone()) {
            return Err(ContractViolation::DuplicateTool {
                agent: name.to_string(),
                tool: definition.name,
            });
        }
    }

    Ok(())
}

/// A validated agent ready to be handed to the host
#[derive(Debug, Clone)]
pub struct ActiveAgent {
    /// Plugin identity
    pub name: String,
    /// Plugin description
    pub description: String,
    /// Plugin version
    pub version: String,
    /// Tools, in the order the agent declared them
    pub tools: Vec<Arc<dyn Tool>>,
    /// System prompt
    pub system_prompt: String,
}

impl ActiveAgent {
    /// Tool definitions in declaration order
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Look up a tool by name
    pub fn find_tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Whether the agent offers no callable tools
    pub fn is_prompt_only(&self) -> bool {
        self.tools.is_empty()
    }

    /// Serializable view of this agent
    pub fn summary(&self) -> AgentSummary {
        AgentSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            system_prompt: self.system_prompt.clone(),
            tools: self.tool_definitions(),
        }
    }
}

/// JSON-friendly description of an active agent
#[derive(Debug, Clone, Serialize)]
pub struct AgentSummary {
    pub name: String,
    pub description: String,
    pub version: String,
    pub system_prompt: String,
    pub tools: Vec<ToolDefinition>,
}
