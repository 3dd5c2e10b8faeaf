//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct deserialized from the call arguments
//! - An explicit parameter list (the published input schema)
//! - The pure function implementing it
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `BuiltinTool` trait
//! 3. Export it here
//! 4. Add it to a toolset in `toolset.rs`

pub mod math;
pub mod text;

pub use math::AddTool;
pub use text::{CapitalizeFirstTool, ToLowercaseTool, ToTitleCaseTool, ToUppercaseTool};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::definition::{Arguments, ParamSpec, ToolDefinition};
use super::error::ToolError;

/// Trait for tools shipped with the server.
///
/// Each tool provides its metadata and a `call` entry point; `definition()`
/// assembles them into a registrable [`ToolDefinition`].
pub trait BuiltinTool: 'static {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// Documentation shown to clients when they select tools.
    const DESCRIPTION: &'static str;

    /// The parameters this tool accepts, in declaration order.
    fn parameters() -> Vec<ParamSpec>;

    /// Run the tool on already validated arguments.
    fn call(arguments: &Arguments) -> Result<Value, ToolError>;

    /// Build the registrable definition of this tool.
    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, Self::parameters(), Self::call)
    }
}

/// Deserialize validated arguments into a tool's parameters struct.
pub(crate) fn parse_params<P: DeserializeOwned>(arguments: &Arguments) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Checks that a hand-written parameter list agrees with the typed
/// parameters struct the tool deserializes into.
#[cfg(test)]
pub(crate) fn assert_schema_matches<P: schemars::JsonSchema>(definition: &ToolDefinition) {
    let generated = schemars::schema_for!(P);
    let generated = generated.as_value();
    let declared = definition.input_schema();

    let generated_props = generated["properties"]
        .as_object()
        .expect("generated schema has properties");
    let declared_props = declared["properties"]
        .as_object()
        .expect("declared schema has properties");

    assert_eq!(generated_props.len(), declared_props.len());
    for (name, prop) in declared_props {
        assert_eq!(
            generated_props[name]["type"], prop["type"],
            "type mismatch for parameter '{}'",
            name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<T: BuiltinTool>() {
        let definition = T::definition();
        assert_eq!(definition.name(), T::NAME);
        assert_eq!(definition.description(), T::DESCRIPTION);
        assert_eq!(definition.parameters(), T::parameters().as_slice());
    }

    #[test]
    fn test_builtin_definitions_carry_metadata() {
        check::<AddTool>();
        check::<ToUppercaseTool>();
        check::<ToLowercaseTool>();
        check::<ToTitleCaseTool>();
        check::<CapitalizeFirstTool>();
    }
}
