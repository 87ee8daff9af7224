//! Command bridge between an orchestrating host and a running Unreal Editor.
//!
//! The editor side (a TCP-listening plugin inside the engine process)
//! executes commands; this crate exposes those commands as named tools that
//! a host can register and invoke. Each tool translates structured JSON
//! arguments into exactly one outbound command and relays back a normalized
//! `{status, result}` / `{status, message}` envelope.
//!
//! # Architecture
//!
//! Two layers:
//! - `engine`: the transport ([`TcpTransport`]) and the single dispatch
//!   chokepoint ([`EngineClient::send_command`])
//! - `tools`: the registry plus one module per command group (scene,
//!   materials, python scripting, blueprint)
//!
//! The call path is stateless and fully synchronous from the caller's point
//! of view: one in-flight command per invocation, no retries, no caching,
//! no state carried between calls.
//!
//! # Example
//! ```rust,no_run
//! use unreal_bridge::engine::{EngineClient, TcpTransport, TransportConfig};
//! use unreal_bridge::tools::{register_all, ToolRegistry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = ToolRegistry::new();
//! register_all(&mut registry)?;
//!
//! let engine = EngineClient::new(Box::new(TcpTransport::new(TransportConfig::default())));
//! let reply = registry
//!     .invoke(&engine, "get_scene_info", serde_json::json!({}))
//!     .await?;
//! # let _ = reply;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod tools;

pub use engine::{EngineClient, TcpTransport, TransportConfig};
pub use tools::{register_all, ToolRegistry, ToolReply};
