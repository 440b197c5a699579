//! The [`Tool`] trait implemented by every invocable plugin tool.

use super::protocol::{ToolDefinition, ToolRequest, ToolResponse};

/// A tool an agent can hand to the host's tool-calling layer.
///
/// Tools own their behavior; agents only hold `Arc<dyn Tool>` references.
/// Failures are reported through [`ToolResponse::error`], never by panicking.
pub trait Tool: Send + Sync {
    /// Returns the LLM-facing definition of this tool.
    fn definition(&self) -> ToolDefinition;

    /// Runs the tool.
    fn execute(&self, request: &ToolRequest) -> ToolResponse;

    /// Tool name, taken from the definition.
    fn name(&self) -> String {
        self.definition().name
    }
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}
