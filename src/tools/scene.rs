//! Scene tools: inspecting and editing the currently open level.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::EngineClient;
use crate::tools::registry::ToolHost;
use crate::tools::types::{relay, RegistryError, ReplyShape, Tool, ToolDescriptor, ToolReply};

/// Register all scene tools with the host.
pub fn register_all(host: &mut dyn ToolHost) -> Result<(), RegistryError> {
    host.register(Box::new(GetSceneInfoTool))?;
    host.register(Box::new(CreateObjectTool))?;
    host.register(Box::new(ModifyObjectTool))?;
    host.register(Box::new(DeleteObjectTool))?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct GetSceneInfoArgs {}

/// Report the actors in the current level.
pub struct GetSceneInfoTool;

#[async_trait]
impl Tool for GetSceneInfoTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_scene_info".into(),
            description: "Get information about the current Unreal scene, including the actors it contains.".into(),
            input_schema: serde_json::json!({"type": "object", "properties": {}}),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: GetSceneInfoArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error getting scene info: {e}")),
        };
        relay(
            engine,
            "get_scene_info",
            &args,
            "getting scene info",
            "Failed to get scene info",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateObjectArgs {
    #[serde(rename = "type")]
    object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Spawn a new object into the level.
pub struct CreateObjectTool;

#[async_trait]
impl Tool for CreateObjectTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "create_object".into(),
            description: "Create a new object in the scene. Type names the actor class (e.g. \"StaticMeshActor\"); location and label are optional.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "type": {"type": "string", "description": "Actor class to spawn"},
                    "location": {"type": "array", "items": {"type": "number"}, "description": "Optional [x, y, z] world location"},
                    "label": {"type": "string", "description": "Optional actor label"}
                },
                "required": ["type"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: CreateObjectArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error creating object: {e}")),
        };
        relay(
            engine,
            "create_object",
            &args,
            "creating object",
            "Failed to create object",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModifyObjectArgs {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rotation: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale: Option<Vec<f64>>,
}

/// Move, rotate, or scale an existing object.
pub struct ModifyObjectTool;

#[async_trait]
impl Tool for ModifyObjectTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "modify_object".into(),
            description: "Modify an object in the scene, addressed by actor name. Any of location, rotation, and scale may be given; omitted fields are left unchanged by the engine.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Actor name to modify"},
                    "location": {"type": "array", "items": {"type": "number"}, "description": "Optional [x, y, z] world location"},
                    "rotation": {"type": "array", "items": {"type": "number"}, "description": "Optional [pitch, yaw, roll] rotation"},
                    "scale": {"type": "array", "items": {"type": "number"}, "description": "Optional [x, y, z] scale"}
                },
                "required": ["name"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: ModifyObjectArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error modifying object: {e}")),
        };
        relay(
            engine,
            "modify_object",
            &args,
            "modifying object",
            "Failed to modify object",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DeleteObjectArgs {
    name: String,
}

/// Remove an object from the level.
pub struct DeleteObjectTool;

#[async_trait]
impl Tool for DeleteObjectTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "delete_object".into(),
            description: "Delete an object from the scene, addressed by actor name.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Actor name to delete"}
                },
                "required": ["name"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: DeleteObjectArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error deleting object: {e}")),
        };
        relay(
            engine,
            "delete_object",
            &args,
            "deleting object",
            "Failed to delete object",
            ReplyShape::StatusOnly,
        )
        .await
    }
}
