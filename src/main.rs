//! Stdio host for the bridge.
//!
//! Reads one JSON request per line on stdin, answers with one JSON envelope
//! per line on stdout. Requests look like `{"tool": "create_blueprint",
//! "args": {...}}`; the special tool name `tools/list` returns the
//! descriptors of everything registered. The engine address can be given as
//! the first command-line argument and defaults to the editor plugin's
//! standard listener.

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use unreal_bridge::engine::{EngineClient, TcpTransport, TransportConfig};
use unreal_bridge::tools::{register_all, ToolRegistry, ToolReply};

#[derive(Debug, Deserialize)]
struct HostRequest {
    tool: String,
    #[serde(default)]
    args: Value,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| unreal_bridge::engine::transport::DEFAULT_ENGINE_ADDR.to_string());

    let mut registry = ToolRegistry::new();
    register_all(&mut registry)?;
    info!(tools = registry.len(), %addr, "bridge ready");

    let engine = EngineClient::new(Box::new(TcpTransport::new(TransportConfig::with_addr(addr))));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<HostRequest>(&line) {
            Ok(request) if request.tool == "tools/list" => {
                let descriptors = serde_json::to_value(registry.list())?;
                ToolReply::success(Some(descriptors))
            }
            Ok(request) => {
                let args = if request.args.is_null() {
                    serde_json::json!({})
                } else {
                    request.args
                };
                match registry.invoke(&engine, &request.tool, args).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(tool = %request.tool, "invocation rejected: {e}");
                        ToolReply::error(e.to_string())
                    }
                }
            }
            Err(e) => ToolReply::error(format!("Error parsing request: {e}")),
        };

        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
