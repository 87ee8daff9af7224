//! Engine-facing layer: transport and command dispatch.
//!
//! Everything that touches the wire lives here. The rest of the crate only
//! sees [`EngineClient::send_command`] and the [`EngineReply`] it returns.

pub mod dispatch;
pub mod transport;

pub use dispatch::{CommandError, EngineClient, EngineReply};
pub use transport::{EngineTransport, TcpTransport, TransportConfig, TransportError};
