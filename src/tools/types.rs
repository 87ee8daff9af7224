//! Shared types and traits for the tool surface.
//!
//! This module defines the core abstractions:
//! - Tool descriptor and invocation envelope types
//! - The `Tool` trait implemented by every engine operation
//! - Registration errors

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::EngineClient;

/// Descriptor for one tool: its stable name, a human description, and the
/// JSON schema of its named inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// The envelope every tool hands back to the host.
///
/// Serializes to exactly `{"status":"success"}`,
/// `{"status":"success","result":...}` or `{"status":"error","message":...}`.
/// There is deliberately no third variant and no way for a handler to return
/// anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolReply {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Value>,
    },
    Error {
        message: String,
    },
}

impl ToolReply {
    /// A success envelope, with or without a result payload.
    pub fn success(result: Option<Value>) -> Self {
        ToolReply::Success { result }
    }

    /// An error envelope with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        ToolReply::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolReply::Success { .. })
    }
}

/// Errors that can occur while building or using the registry.
///
/// These belong to the host boundary, not the tools: once a handler runs it
/// always returns a [`ToolReply`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Trait implemented by every engine operation exposed as a tool.
///
/// Handlers are the final error boundary: `invoke` returns a [`ToolReply`]
/// rather than a `Result`, so no failure (bad arguments, transport loss,
/// malformed replies) can propagate past a tool as anything but a
/// well-formed error envelope.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the descriptor for this tool.
    fn descriptor(&self) -> ToolDescriptor;

    /// Invokes the tool against the engine with the given JSON arguments.
    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply;
}

/// Whether a command's success envelope carries the engine's result payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReplyShape {
    /// `{"status":"success","result":...}` with the payload passed through
    /// untouched.
    WithResult,
    /// `{"status":"success"}` for operations with no meaningful payload.
    StatusOnly,
}

/// Shared tail of every handler: serialize the params, send the command, and
/// normalize whatever comes back.
///
/// `action` names the operation for transport-failure messages ("creating
/// blueprint" becomes "Error creating blueprint: ..."); `default_error` is
/// the fixed fallback used when the engine reports failure without a message.
pub(crate) async fn relay<P: Serialize>(
    engine: &EngineClient,
    command: &str,
    params: &P,
    action: &str,
    default_error: &str,
    shape: ReplyShape,
) -> ToolReply {
    let params = match serde_json::to_value(params) {
        Ok(params) => params,
        Err(e) => return ToolReply::error(format!("Error {action}: {e}")),
    };

    match engine.send_command(command, params).await {
        Ok(reply) if reply.is_success() => match shape {
            ReplyShape::WithResult => ToolReply::success(reply.result),
            ReplyShape::StatusOnly => ToolReply::success(None),
        },
        Ok(reply) => ToolReply::error(
            reply
                .message
                .unwrap_or_else(|| default_error.to_string()),
        ),
        Err(e) => ToolReply::error(format!("Error {action}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_with_result_serializes_both_fields() {
        let reply = ToolReply::success(Some(serde_json::json!({"path": "/Game/BP"})));
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({"status": "success", "result": {"path": "/Game/BP"}})
        );
    }

    #[test]
    fn success_without_result_omits_the_key() {
        let reply = ToolReply::success(None);
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({"status": "success"})
        );
    }

    #[test]
    fn error_serializes_status_and_message() {
        let reply = ToolReply::error("Failed to create blueprint");
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({"status": "error", "message": "Failed to create blueprint"})
        );
    }
}
