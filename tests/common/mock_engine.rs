//! Scripted engine transport for integration testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use unreal_bridge::engine::{EngineTransport, TransportError};

#[derive(Default)]
struct MockEngineState {
    /// Scripted reply per command name.
    replies: HashMap<String, Value>,
    /// Every (command, params) pair the bridge sent.
    calls: Vec<(String, Value)>,
    /// When set, every call fails with this connection error.
    failure: Option<String>,
}

/// A mock engine that records outgoing commands and answers from a script.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the [`unreal_bridge::engine::EngineClient`] owns another.
#[derive(Clone, Default)]
pub struct MockEngine {
    state: Arc<Mutex<MockEngineState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for one command.
    pub fn reply_with(&self, command: &str, reply: Value) {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert(command.to_string(), reply);
    }

    /// Make every call fail with a connection error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    /// All (command, params) pairs seen so far.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The params of the most recent call to `command`, if any.
    pub fn last_params(&self, command: &str) -> Option<Value> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .rev()
            .find(|(c, _)| c == command)
            .map(|(_, p)| p.clone())
    }

    pub fn boxed(&self) -> Box<dyn EngineTransport> {
        Box::new(self.clone())
    }
}

#[async_trait]
impl EngineTransport for MockEngine {
    async fn call(&self, command: &str, params: Value) -> Result<Value, TransportError> {
        let mut state = self.state.lock().unwrap();

        if let Some(message) = &state.failure {
            return Err(TransportError::Connection(message.clone()));
        }

        state.calls.push((command.to_string(), params));

        Ok(state
            .replies
            .get(command)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({"status": "success"})))
    }
}
