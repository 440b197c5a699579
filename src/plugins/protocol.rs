//! Tool protocol definitions
//!
//! Defines the tool definition, request and response shapes that every
//! plugin tool speaks. Definitions serialize to JSON so the host can hand
//! them to its model layer unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tool definition for AI prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (e.g., "whoami")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter definitions
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    /// Whether this tool requires confirmation
    #[serde(default)]
    pub requires_confirmation: bool,
    /// Whether this tool is potentially destructive
    #[serde(default)]
    pub is_destructive: bool,
}

impl ToolDefinition {
    /// Create a read-only definition without parameters
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: vec![],
            requires_confirmation: false,
            is_destructive: false,
        }
    }

    /// Append a parameter
    pub fn with_parameter(mut self, param: ParameterDef) -> Self {
        self.parameters.push(param);
        self
    }

    /// Ask the host to confirm with the user before running
    pub fn requiring_confirmation(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }

    /// Mark as destructive; destructive tools always need confirmation
    pub fn destructive(mut self) -> Self {
        self.is_destructive = true;
        self.requires_confirmation = true;
        self
    }
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDef {
    /// Parameter name
    pub name: String,
    /// Parameter type (string, number, boolean, array, object)
    #[serde(rename = "type")]
    pub param_type: String,
    /// Description
    pub description: String,
    /// Whether parameter is required
    #[serde(default)]
    pub required: bool,
    /// Default value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ParameterDef {
    /// A required parameter
    pub fn required(name: &str, param_type: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: param_type.to_string(),
            description: description.to_string(),
            required: true,
            default: None,
        }
    }

    /// An optional parameter with a default value
    pub fn optional(
        name: &str,
        param_type: &str,
        description: &str,
        default: serde_json::Value,
    ) -> Self {
        Self {
            name: name.to_string(),
            param_type: param_type.to_string(),
            description: description.to_string(),
            required: false,
            default: Some(default),
        }
    }
}

/// Request sent to a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Request ID for correlation
    pub id: String,
    /// Tool name to invoke
    pub tool: String,
    /// Parameters passed to the tool
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

/// Response from a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Request ID this responds to
    pub id: String,
    /// Whether the operation succeeded
    pub success: bool,
    /// Result data (if success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error message (if failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl ToolResponse {
    /// Create a success response
    pub fn success(id: &str, result: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            success: true,
            result: Some(result),
            error: None,
            output: None,
        }
    }

    /// Create a success response with output
    pub fn success_with_output(id: &str, result: serde_json::Value, output: &str) -> Self {
        Self {
            id: id.to_string(),
            success: true,
            result: Some(result),
            error: None,
            output: Some(output.to_string()),
        }
    }

    /// Create an error response
    pub fn error(id: &str, message: &str) -> Self {
        Self {
            id: id.to_string(),
            success: false,
            result: None,
            error: Some(message.to_string()),
            output: None,
        }
    }
}

impl ToolRequest {
    /// Create a new request
    pub fn new(tool: &str, params: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tool: tool.to_string(),
            params,
        }
    }

    /// Get a string parameter
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|v| v.as_str())
    }

    /// Get a required string parameter
    pub fn require_string(&self, name: &str) -> Result<&str, String> {
        self.get_string(name)
            .ok_or_else(|| format!("Missing required parameter: {}", name))
    }

    /// Get a boolean parameter with default
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.params
            .get(name)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// Get an integer parameter; whole-number floats such as `3.0` count
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        let value = self.params.get(name)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }
}
