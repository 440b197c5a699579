//! Tools for the myinfo agent

use crate::plugins::protocol::{ParameterDef, ToolDefinition, ToolRequest, ToolResponse};
use crate::plugins::tool::Tool;
use std::sync::Arc;

const SUMMARY: &str = "I'm Echo AI, a conversational assistant made of specialised sub-agents.";

const DETAILS: &str = "Each sub-agent focuses on one job and brings its own tools: \
one explains who I am, another looks things up for you. \
Ask me anything and I'll route your question to the agent best suited to answer it.";

/// Tools of the "who am I" agent
pub fn my_info_tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(WhoAmITool)]
}

/// Describes Echo AI
pub struct WhoAmITool;

impl Tool for WhoAmITool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "whoami",
            "Who is Echo AI: describes the assistant and what it can do",
        )
        .with_parameter(ParameterDef::optional(
            "detailed",
            "boolean",
            "Include how the assistant is organised",
            serde_json::json!(false),
        ))
    }

    fn execute(&self, request: &ToolRequest) -> ToolResponse {
        let detailed = request.get_bool("detailed", false);

        let output = if detailed {
            format!("{} {}", SUMMARY, DETAILS)
        } else {
            SUMMARY.to_string()
        };

        ToolResponse::success_with_output(
            &request.id,
            serde_json::json!({
                "name": "Echo AI",
                "detailed": detailed,
            }),
            &output,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_definition() {
        let def = WhoAmITool.definition();
        assert_eq!(def.name, "whoami");
        assert!(!def.is_destructive);
        assert!(def.parameters.iter().all(|p| !p.required));
    }

    #[test]
    fn test_brief_answer() {
        let response = WhoAmITool.execute(&ToolRequest::new("whoami", HashMap::new()));

        assert!(response.success);
        assert_eq!(response.output.as_deref(), Some(SUMMARY));
        assert_eq!(response.result.unwrap()["name"], "Echo AI");
    }

    #[test]
    fn test_detailed_answer() {
        let mut params = HashMap::new();
        params.insert("detailed".to_string(), serde_json::json!(true));

        let response = WhoAmITool.execute(&ToolRequest::new("whoami", params));

        let output = response.output.unwrap();
        assert!(output.starts_with(SUMMARY));
        assert!(output.contains("sub-agent"));
    }
}
