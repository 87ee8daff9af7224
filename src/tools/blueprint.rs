//! Blueprint tools: creating, querying, and modifying blueprints in the
//! Unreal project.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::EngineClient;
use crate::tools::registry::ToolHost;
use crate::tools::types::{relay, RegistryError, ReplyShape, Tool, ToolDescriptor, ToolReply};

/// Register all blueprint tools with the host.
pub fn register_all(host: &mut dyn ToolHost) -> Result<(), RegistryError> {
    host.register(Box::new(CreateBlueprintTool))?;
    host.register(Box::new(GetBlueprintInfoTool))?;
    host.register(Box::new(ModifyBlueprintTool))?;
    host.register(Box::new(CreateBlueprintEventTool))?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateBlueprintArgs {
    package_path: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Value>,
}

/// Create a new blueprint asset.
pub struct CreateBlueprintTool;

#[async_trait]
impl Tool for CreateBlueprintTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "create_blueprint".into(),
            description: "Create a new blueprint in the Unreal project. Pass the package path (e.g. \"/Game/Blueprints\"), the blueprint name, and optional properties such as parent_class.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "package_path": {"type": "string", "description": "Path where the blueprint is created, e.g. \"/Game/Blueprints\""},
                    "name": {"type": "string", "description": "Name of the blueprint"},
                    "properties": {"type": "object", "description": "Optional blueprint properties, e.g. parent_class"}
                },
                "required": ["package_path", "name"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: CreateBlueprintArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error creating blueprint: {e}")),
        };
        relay(
            engine,
            "create_blueprint",
            &args,
            "creating blueprint",
            "Failed to create blueprint",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GetBlueprintInfoArgs {
    blueprint_path: String,
}

/// Query information about an existing blueprint.
pub struct GetBlueprintInfoTool;

#[async_trait]
impl Tool for GetBlueprintInfoTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_blueprint_info".into(),
            description: "Get information about a blueprint, addressed by its full path (e.g. \"/Game/Blueprints/MyBlueprint\").".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "blueprint_path": {"type": "string", "description": "Full path to the blueprint"}
                },
                "required": ["blueprint_path"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: GetBlueprintInfoArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error getting blueprint info: {e}")),
        };
        relay(
            engine,
            "get_blueprint_info",
            &args,
            "getting blueprint info",
            "Failed to get blueprint info",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModifyBlueprintArgs {
    blueprint_path: String,
    properties: Value,
}

/// Modify properties of an existing blueprint.
pub struct ModifyBlueprintTool;

#[async_trait]
impl Tool for ModifyBlueprintTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "modify_blueprint".into(),
            description: "Modify an existing blueprint. Properties may include description, category, or options.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "blueprint_path": {"type": "string", "description": "Full path to the blueprint to modify"},
                    "properties": {"type": "object", "description": "Properties to change"}
                },
                "required": ["blueprint_path", "properties"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: ModifyBlueprintArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error modifying blueprint: {e}")),
        };
        relay(
            engine,
            "modify_blueprint",
            &args,
            "modifying blueprint",
            "Failed to modify blueprint",
            ReplyShape::StatusOnly,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateBlueprintEventArgs {
    event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blueprint_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<Value>,
}

/// Create a new event in a blueprint.
pub struct CreateBlueprintEventTool;

#[async_trait]
impl Tool for CreateBlueprintEventTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "create_blueprint_event".into(),
            description: "Create a new event in a blueprint. When blueprint_path is omitted the engine creates a new blueprint to hold the event.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "event_name": {"type": "string", "description": "Name of the event to create"},
                    "blueprint_path": {"type": "string", "description": "Optional path to an existing blueprint"},
                    "parameters": {"type": "object", "description": "Optional event parameters"}
                },
                "required": ["event_name"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: CreateBlueprintEventArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error creating blueprint event: {e}")),
        };
        relay(
            engine,
            "create_blueprint_event",
            &args,
            "creating blueprint event",
            "Failed to create blueprint event",
            ReplyShape::WithResult,
        )
        .await
    }
}
