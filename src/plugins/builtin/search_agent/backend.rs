//! Search backends

use serde::{Deserialize, Serialize};

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
}

/// Performs the actual lookup for the search tool
///
/// Implementations must be safe to share across sessions.
pub trait SearchBackend: Send + Sync {
    /// Return at most `max_results` hits for `query`
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, String>;
}

/// Backend used when the host has not configured one
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredBackend;

impl SearchBackend for UnconfiguredBackend {
    fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<SearchHit>, String> {
        Err("No search backend configured".to_string())
    }
}
