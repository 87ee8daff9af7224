//! Tool registry: the process-wide mapping from tool name to handler.
//!
//! Built once at startup by the command-group registrars, read-only
//! afterwards. Hosts that want to mount the bridge's tools implement
//! [`ToolHost`]; [`ToolRegistry`] is the in-process implementation used by
//! the stdio host and the tests.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::engine::EngineClient;
use crate::tools::types::{RegistryError, Tool, ToolDescriptor, ToolReply};

/// The narrow registration capability handed to command-group registrars.
///
/// Registration is append-only: there is no removal and no re-registration.
/// Registering a name twice is a startup-time error, never a silent
/// last-wins overwrite.
pub trait ToolHost {
    /// Add a tool to the host's dispatch table.
    fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), RegistryError>;
}

/// Registry of all bridge tools.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List descriptors for every registered tool, sorted by name.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> =
            self.tools.values().map(|t| t.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Invoke a tool by name with the given arguments.
    ///
    /// An unknown name is a host-level error; once a handler is found its
    /// reply is always a well-formed envelope.
    pub async fn invoke(
        &self,
        engine: &EngineClient,
        name: &str,
        args: Value,
    ) -> Result<ToolReply, RegistryError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;

        Ok(tool.invoke(engine, args).await)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolHost for ToolRegistry {
    fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.descriptor().name;
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateTool(name));
        }

        debug!(tool = %name, "registered tool");
        self.tools.insert(name, tool);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeTool(&'static str);

    #[async_trait]
    impl Tool for FakeTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor {
                name: self.0.to_string(),
                description: "fake".to_string(),
                input_schema: serde_json::json!({"type": "object"}),
            }
        }

        async fn invoke(&self, _engine: &EngineClient, _args: Value) -> ToolReply {
            ToolReply::success(None)
        }
    }

    #[test]
    fn duplicate_registration_fails_fast() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FakeTool("create_object"))).unwrap();

        let err = registry
            .register(Box::new(FakeTool("create_object")))
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateTool(name) if name == "create_object"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FakeTool("b_tool"))).unwrap();
        registry.register(Box::new(FakeTool("a_tool"))).unwrap();

        let names: Vec<String> = registry.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a_tool", "b_tool"]);
    }
}
