//! Command dispatch: the single chokepoint between tools and the engine.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::transport::{EngineTransport, TransportError};

/// A normalized reply from the engine.
///
/// The editor plugin always answers with an object carrying at least a
/// `status` field; `result` and `message` are present depending on the
/// command and outcome. `status` is kept as a raw string so that handlers,
/// not this layer, decide how to treat anything other than `"success"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineReply {
    pub status: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EngineReply {
    /// True when the engine reported success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Errors surfaced by [`EngineClient::send_command`].
///
/// This is the uniform failure kind tool handlers guard against: either the
/// transport failed, or the reply could not be interpreted. Engine-reported
/// failures are not errors at this layer; they come back as an
/// [`EngineReply`] with a non-success status.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Transport(#[from] TransportError),
    #[error("malformed engine reply: {0}")]
    MalformedReply(String),
}

/// Client for dispatching commands to the engine.
///
/// Owns the transport and performs exactly one request per call with exactly
/// one reply expected. No retries and no state between calls.
pub struct EngineClient {
    transport: Box<dyn EngineTransport>,
}

impl EngineClient {
    /// Create a client over the given transport.
    pub fn new(transport: Box<dyn EngineTransport>) -> Self {
        Self { transport }
    }

    /// Send a command and return the engine's normalized reply.
    pub async fn send_command(
        &self,
        command: &str,
        params: Value,
    ) -> Result<EngineReply, CommandError> {
        debug!(command, "dispatching engine command");

        let raw = self.transport.call(command, params).await?;

        let reply: EngineReply = serde_json::from_value(raw)
            .map_err(|e| CommandError::MalformedReply(e.to_string()))?;

        debug!(command, status = %reply.status, "engine replied");
        Ok(reply)
    }
}
