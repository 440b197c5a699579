//! "Who am I" plugin
//!
//! Lets Echo AI explain itself to the user.

mod agent;
mod tools;

pub use agent::{MyInfoAgent, SYSTEM_PROMPT};
pub use tools::{my_info_tools, WhoAmITool};

use crate::plugins::descriptor::PluginDescriptor;

/// Plugin identity
pub const NAME: &str = "myinfo_agent";

/// Plugin descriptor
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new(NAME)
        .with_description("Explains who Echo AI is and what it can do")
        .with_agent::<MyInfoAgent>()
}
