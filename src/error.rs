//! Error types for echo-plugins

use thiserror::Error;

/// Main error type for echo-plugins
#[derive(Error, Debug)]
pub enum EchoError {
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),
}

/// Errors raised while registering a plugin descriptor.
///
/// A failed registration never modifies the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("plugin descriptor has no identity")]
    MissingIdentity,

    #[error("invalid plugin identity '{0}': expected lowercase letters, digits, '_' or '-'")]
    InvalidIdentity(String),

    #[error("plugin '{0}' does not reference an agent")]
    MissingAgent(String),

    #[error("plugin '{0}' is already registered")]
    Duplicate(String),
}

impl RegistrationError {
    /// Identity the error refers to, if the descriptor had one
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::MissingIdentity => None,
            Self::InvalidIdentity(name) | Self::MissingAgent(name) | Self::Duplicate(name) => {
                Some(name)
            }
        }
    }
}

/// An agent instance that does not honour the plugin contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("agent '{agent}' returned an empty system prompt")]
    EmptyPrompt { agent: String },

    #[error("agent '{agent}' exposes a tool without a name (position {index})")]
    UnnamedTool { agent: String, index: usize },

    #[error("agent '{agent}' exposes tool '{tool}' more than once")]
    DuplicateTool { agent: String, tool: String },

    #[error("tool '{tool}' of agent '{agent}' declares a parameter without a name")]
    UnnamedParameter { agent: String, tool: String },
}

impl ContractViolation {
    /// Name of the offending agent
    pub fn agent(&self) -> &str {
        match self {
            Self::EmptyPrompt { agent }
            | Self::UnnamedTool { agent, .. }
            | Self::DuplicateTool { agent, .. }
            | Self::UnnamedParameter { agent, .. } => agent,
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias using EchoError
pub type Result<T> = std::result::Result<T, EchoError>;
