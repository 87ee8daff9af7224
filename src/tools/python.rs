//! Python scripting tool: running Python inside the editor's interpreter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::EngineClient;
use crate::tools::registry::ToolHost;
use crate::tools::types::{relay, RegistryError, ReplyShape, Tool, ToolDescriptor, ToolReply};

/// Register the python scripting tools with the host.
pub fn register_all(host: &mut dyn ToolHost) -> Result<(), RegistryError> {
    host.register(Box::new(ExecutePythonTool))?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct ExecutePythonArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

/// Run Python code or a Python file in the editor.
///
/// Both inputs are optional and forwarded as given; whether at least one was
/// supplied is for the engine to judge, like every other semantic check.
pub struct ExecutePythonTool;

#[async_trait]
impl Tool for ExecutePythonTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "execute_python".into(),
            description: "Execute Python in the Unreal Editor's interpreter. Pass either code (a script as a string) or file (a path to a script on the editor machine).".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "code": {"type": "string", "description": "Python source to run"},
                    "file": {"type": "string", "description": "Path to a Python file to run"}
                }
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: ExecutePythonArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error executing Python: {e}")),
        };
        relay(
            engine,
            "execute_python",
            &args,
            "executing Python",
            "Failed to execute Python",
            ReplyShape::WithResult,
        )
        .await
    }
}
