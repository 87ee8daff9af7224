//! Material tools: creating, querying, and modifying material assets.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::EngineClient;
use crate::tools::registry::ToolHost;
use crate::tools::types::{relay, RegistryError, ReplyShape, Tool, ToolDescriptor, ToolReply};

/// Register all material tools with the host.
pub fn register_all(host: &mut dyn ToolHost) -> Result<(), RegistryError> {
    host.register(Box::new(CreateMaterialTool))?;
    host.register(Box::new(GetMaterialInfoTool))?;
    host.register(Box::new(ModifyMaterialTool))?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateMaterialArgs {
    package_path: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Value>,
}

/// Create a new material asset.
pub struct CreateMaterialTool;

#[async_trait]
impl Tool for CreateMaterialTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "create_material".into(),
            description: "Create a new material in the Unreal project. Pass the package path (e.g. \"/Game/Materials\"), the material name, and optional properties such as base color.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "package_path": {"type": "string", "description": "Path where the material is created, e.g. \"/Game/Materials\""},
                    "name": {"type": "string", "description": "Name of the material"},
                    "properties": {"type": "object", "description": "Optional material properties"}
                },
                "required": ["package_path", "name"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: CreateMaterialArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error creating material: {e}")),
        };
        relay(
            engine,
            "create_material",
            &args,
            "creating material",
            "Failed to create material",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GetMaterialInfoArgs {
    material_path: String,
}

/// Query information about an existing material.
pub struct GetMaterialInfoTool;

#[async_trait]
impl Tool for GetMaterialInfoTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_material_info".into(),
            description: "Get information about a material, addressed by its full path (e.g. \"/Game/Materials/MyMaterial\").".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "material_path": {"type": "string", "description": "Full path to the material"}
                },
                "required": ["material_path"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: GetMaterialInfoArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error getting material info: {e}")),
        };
        relay(
            engine,
            "get_material_info",
            &args,
            "getting material info",
            "Failed to get material info",
            ReplyShape::WithResult,
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModifyMaterialArgs {
    material_path: String,
    properties: Value,
}

/// Modify properties of an existing material.
pub struct ModifyMaterialTool;

#[async_trait]
impl Tool for ModifyMaterialTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "modify_material".into(),
            description: "Modify an existing material's properties.".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "material_path": {"type": "string", "description": "Full path to the material to modify"},
                    "properties": {"type": "object", "description": "Properties to change"}
                },
                "required": ["material_path", "properties"]
            }),
        }
    }

    async fn invoke(&self, engine: &EngineClient, args: Value) -> ToolReply {
        let args: ModifyMaterialArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return ToolReply::error(format!("Error modifying material: {e}")),
        };
        relay(
            engine,
            "modify_material",
            &args,
            "modifying material",
            "Failed to modify material",
            ReplyShape::StatusOnly,
        )
        .await
    }
}
