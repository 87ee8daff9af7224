//! Transport layer for talking to the Unreal Editor plugin.
//!
//! The editor side listens on a plain TCP socket and speaks a minimal
//! request/response protocol: the client writes one JSON document of the
//! shape `{"command": ..., "params": ...}` and the server answers with one
//! JSON document. There is no framing beyond "read until the bytes parse",
//! which is what the editor plugin itself does on the receiving end.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, trace};

/// Default address of the editor-side TCP listener.
pub const DEFAULT_ENGINE_ADDR: &str = "127.0.0.1:1337";

/// Default timeout for a full command round trip.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on reply size, matching the editor's receive buffer scale.
pub const DEFAULT_MAX_REPLY_BYTES: usize = 1 << 20;

/// Errors specific to transport operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Could not reach the engine process.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The round trip did not complete in time.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
    /// I/O failure while the connection was up.
    #[error("I/O error: {0}")]
    Io(String),
    /// The reply bytes never formed a JSON document.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The outgoing request could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TransportError {
    pub fn connection<E: std::fmt::Display>(err: E) -> Self {
        TransportError::Connection(err.to_string())
    }

    pub fn io<E: std::fmt::Display>(err: E) -> Self {
        TransportError::Io(err.to_string())
    }
}

/// Configuration for the TCP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Address of the editor-side listener.
    pub addr: String,
    /// Timeout covering connect, send, and reply.
    pub timeout: Duration,
    /// Upper bound on accumulated reply bytes.
    pub max_reply_bytes: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ENGINE_ADDR.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            max_reply_bytes: DEFAULT_MAX_REPLY_BYTES,
        }
    }
}

impl TransportConfig {
    /// Create a config pointing at the given address.
    pub fn with_addr(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Default::default()
        }
    }

    /// Set the round-trip timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trait for engine transports.
///
/// One call is one command: the transport owns connection lifecycle and
/// framing, callers only see the raw reply value or a [`TransportError`].
/// Implementations must be safe for concurrent use; this layer adds no
/// coordination of its own.
#[async_trait]
pub trait EngineTransport: Send + Sync {
    /// Deliver `command` with `params` to the engine and return its reply.
    async fn call(&self, command: &str, params: Value) -> Result<Value, TransportError>;
}

/// TCP transport for the Unreal Editor plugin.
///
/// Opens a fresh connection per command, the same way the editor plugin
/// expects its clients to behave. No pooling and no retries.
pub struct TcpTransport {
    config: TransportConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the configured engine address.
    pub fn addr(&self) -> &str {
        &self.config.addr
    }

    async fn exchange(&self, payload: Vec<u8>) -> Result<Value, TransportError> {
        let mut stream = TcpStream::connect(&self.config.addr)
            .await
            .map_err(|e| {
                TransportError::connection(format!(
                    "failed to connect to engine at {}: {}",
                    self.config.addr, e
                ))
            })?;

        stream
            .write_all(&payload)
            .await
            .map_err(|e| TransportError::io(format!("failed to send command: {}", e)))?;
        stream
            .flush()
            .await
            .map_err(|e| TransportError::io(format!("failed to flush: {}", e)))?;

        trace!("wrote {} bytes to engine", payload.len());

        // The reply is a single JSON document with no delimiter; accumulate
        // bytes until they parse or the server closes the connection.
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream
                .read(&mut chunk)
                .await
                .map_err(|e| TransportError::io(format!("failed to read reply: {}", e)))?;

            if n == 0 {
                if buf.is_empty() {
                    return Err(TransportError::InvalidResponse(
                        "connection closed before any reply".to_string(),
                    ));
                }
                return serde_json::from_slice(&buf).map_err(|e| {
                    TransportError::InvalidResponse(format!(
                        "connection closed with unparseable reply: {}",
                        e
                    ))
                });
            }

            buf.extend_from_slice(&chunk[..n]);
            if buf.len() > self.config.max_reply_bytes {
                return Err(TransportError::InvalidResponse(format!(
                    "reply exceeded {} bytes",
                    self.config.max_reply_bytes
                )));
            }

            if let Ok(value) = serde_json::from_slice::<Value>(&buf) {
                trace!("read complete reply of {} bytes", buf.len());
                return Ok(value);
            }
        }
    }
}

#[async_trait]
impl EngineTransport for TcpTransport {
    async fn call(&self, command: &str, params: Value) -> Result<Value, TransportError> {
        debug!(command, addr = %self.config.addr, "sending engine command");

        let request = serde_json::json!({
            "command": command,
            "params": params,
        });
        let payload = serde_json::to_vec(&request)
            .map_err(|e| TransportError::Serialization(e.to_string()))?;

        tokio::time::timeout(self.config.timeout, self.exchange(payload))
            .await
            .map_err(|_| TransportError::Timeout(self.config.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn spawn_one_shot_server(reply: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(reply.as_bytes()).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn call_round_trips_a_json_reply() {
        let addr = spawn_one_shot_server(r#"{"status":"success","result":{"ok":true}}"#).await;
        let transport = TcpTransport::new(TransportConfig::with_addr(addr));

        let reply = transport
            .call("get_scene_info", serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(reply["status"], "success");
        assert_eq!(reply["result"]["ok"], true);
    }

    #[tokio::test]
    async fn call_sends_command_and_params_fields() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            socket.write_all(br#"{"status":"success"}"#).await.unwrap();
            serde_json::from_slice::<Value>(&buf[..n]).unwrap()
        });

        let transport = TcpTransport::new(TransportConfig::with_addr(addr));
        transport
            .call("delete_object", serde_json::json!({"name": "Cube"}))
            .await
            .unwrap();

        let seen = server.await.unwrap();
        assert_eq!(seen["command"], "delete_object");
        assert_eq!(seen["params"]["name"], "Cube");
    }

    #[tokio::test]
    async fn connection_refused_is_a_connection_error() {
        // Bind then drop to get a port that refuses connections.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let transport = TcpTransport::new(TransportConfig::with_addr(addr));
        let err = transport
            .call("get_scene_info", serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Connection(_)), "{err:?}");
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without replying.
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let transport = TcpTransport::new(
            TransportConfig::with_addr(addr).with_timeout(Duration::from_millis(100)),
        );
        let err = transport
            .call("get_scene_info", serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Timeout(_)), "{err:?}");
    }

    #[tokio::test]
    async fn garbage_reply_is_invalid_response() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(b"not json at all").await.unwrap();
            // Close so the client stops accumulating.
        });

        let transport = TcpTransport::new(TransportConfig::with_addr(addr));
        let err = transport
            .call("get_scene_info", serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidResponse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn reply_split_across_writes_is_reassembled() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(br#"{"status":"succ"#).await.unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
            socket.write_all(br#"ess","result":42}"#).await.unwrap();
        });

        let transport = TcpTransport::new(TransportConfig::with_addr(addr));
        let reply = transport
            .call("get_scene_info", serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(reply["status"], "success");
        assert_eq!(reply["result"], 42);
    }
}
