//! The `web_search` tool

use super::backend::{SearchBackend, SearchHit};
use crate::plugins::protocol::{ParameterDef, ToolDefinition, ToolRequest, ToolResponse};
use crate::plugins::tool::Tool;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_MAX_RESULTS: i64 = 5;
const MAX_RESULTS_CAP: i64 = 20;

/// Searches through the configured backend
pub struct WebSearchTool {
    backend: Arc<dyn SearchBackend>,
}

impl WebSearchTool {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }
}

impl Tool for WebSearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "web_search",
            "Search for up-to-date information and return titled results with links",
        )
        .with_parameter(ParameterDef::required(
            "query",
            "string",
            "What to search for",
        ))
        .with_parameter(ParameterDef::optional(
            "max_results",
            "integer",
            "Maximum number of results (1-20)",
            serde_json::json!(DEFAULT_MAX_RESULTS),
        ))
    }

    fn execute(&self, request: &ToolRequest) -> ToolResponse {
        let query = match request.require_string("query") {
            Ok(q) if !q.trim().is_empty() => q.trim(),
            Ok(_) => return ToolResponse::error(&request.id, "Query must not be empty"),
            Err(e) => return ToolResponse::error(&request.id, &e),
        };

        let max_results = request
            .get_i64("max_results")
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_RESULTS_CAP) as usize;

        debug!("Searching for '{}' (max {})", query, max_results);

        let mut hits = match self.backend.search(query, max_results) {
            Ok(hits) => hits,
            Err(e) => return ToolResponse::error(&request.id, &format!("Search failed: {}", e)),
        };
        hits.truncate(max_results);
        let output = format_hits(&hits);

        ToolResponse::success_with_output(
            &request.id,
            serde_json::json!({
                "query": query,
                "count": hits.len(),
                "results": hits,
            }),
            &output,
        )
    }
}

/// Render hits as a numbered list
fn format_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found".to_string();
    }

    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            if hit.snippet.is_empty() {
                format!("{}. {}\n   {}", i + 1, hit.title, hit.url)
            } else {
                format!("{}. {}\n   {}\n   {}", i + 1, hit.title, hit.url, hit.snippet)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
