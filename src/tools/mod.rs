//! Tool surface of the bridge.
//!
//! Each engine operation is one tool with a fixed name and parameter schema.
//! Tools are grouped by command area (scene, materials, python, blueprint);
//! every handler follows the same shape: parse named inputs, build the
//! outgoing params with optional fields omitted entirely, send one command,
//! and normalize the reply into a success or error envelope. The repetition
//! across handlers is the design, not an accident.

pub mod blueprint;
pub mod materials;
pub mod python;
pub mod registry;
pub mod scene;
pub mod types;

pub use registry::{ToolHost, ToolRegistry};
pub use types::{RegistryError, Tool, ToolDescriptor, ToolReply};

/// Register every command group with the host, in fixed order.
///
/// The groups declare disjoint name sets; a collision is a bug and surfaces
/// here as a fail-fast [`RegistryError::DuplicateTool`].
pub fn register_all(host: &mut dyn ToolHost) -> Result<(), RegistryError> {
    scene::register_all(host)?;
    materials::register_all(host)?;
    python::register_all(host)?;
    blueprint::register_all(host)?;
    Ok(())
}
