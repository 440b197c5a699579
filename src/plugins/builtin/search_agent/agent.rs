//! The search agent
//!
//! Holds a single `web_search` tool bound to whichever backend it was built with.

use super::backend::{SearchBackend, UnconfiguredBackend};
use super::tools::WebSearchTool;
use crate::plugins::agent::{PromptProvider, ToolProvider};
use crate::plugins::tool::Tool;
use std::sync::Arc;

/// System prompt of the search agent
pub const SYSTEM_PROMPT: &str = "You're Echo AI's search specialist. \
Use the web_search tool to look up facts you are not certain about, \
answer from the results you found and cite the links you relied on. \
If the search tool is unavailable or returns nothing, say so plainly instead of guessing.";

/// Agent that answers questions by searching
pub struct SearchAgent {
    tools: Vec<Arc<dyn Tool>>,
}

impl SearchAgent {
    /// Create an agent whose search tool uses `backend`
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            tools: vec![Arc::new(WebSearchTool::new(backend))],
        }
    }
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self::new(Arc::new(UnconfiguredBackend))
    }
}

impl ToolProvider for SearchAgent {
    fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }
}

impl PromptProvider for SearchAgent {
    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }
}
