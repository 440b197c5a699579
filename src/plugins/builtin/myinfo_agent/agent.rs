//! The myinfo agent: one `whoami` tool and a fixed identity prompt

use super::tools::my_info_tools;
use crate::plugins::agent::{PromptProvider, ToolProvider};
use crate::plugins::tool::Tool;
use std::sync::Arc;

/// System prompt of the "who am I" agent
pub const SYSTEM_PROMPT: &str =
    "You're Echo AI, your goal is to help user understand, get to know who you are";

/// Agent that answers questions about Echo AI itself
pub struct MyInfoAgent {
    tools: Vec<Arc<dyn Tool>>,
}

impl Default for MyInfoAgent {
    fn default() -> Self {
        Self {
            tools: my_info_tools(),
        }
    }
}

impl ToolProvider for MyInfoAgent {
    fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }
}

impl PromptProvider for MyInfoAgent {
    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }
}
