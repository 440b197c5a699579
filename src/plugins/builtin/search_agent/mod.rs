//! Search plugin
//!
//! Answers questions by looking things up. The lookup itself is delegated
//! to a [`SearchBackend`] supplied by the host; the default descriptor uses
//! [`UnconfiguredBackend`], which reports the search tool as unavailable.

mod agent;
mod backend;
mod tools;

pub use agent::{SearchAgent, SYSTEM_PROMPT};
pub use backend::{SearchBackend, SearchHit, UnconfiguredBackend};
pub use tools::WebSearchTool;

use crate::plugins::descriptor::PluginDescriptor;
use std::sync::Arc;

/// Plugin identity
pub const NAME: &str = "search_agent";

const DESCRIPTION: &str = "Looks up information and cites its sources";

/// Plugin descriptor without a search backend
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(NAME)
        .with_description(DESCRIPTION)
        .with_agent::<SearchAgent>()
}

/// Plugin descriptor wired to a host-provided backend
pub fn descriptor_with_backend(backend: Arc<dyn SearchBackend>) -> PluginDescriptor {
    PluginDescriptor::new(NAME)
        .with_description(DESCRIPTION)
        .with_factory(move || SearchAgent::new(backend.clone()))
}
