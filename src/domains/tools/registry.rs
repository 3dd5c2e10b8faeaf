//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A name-keyed registry of tool definitions
//! - Argument validation and dispatch for tool calls
//! - Tool metadata for listing
//!
//! The registry is populated once at startup and shared read-only
//! (behind an `Arc`) with every transport afterwards.

use std::collections::HashMap;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::definition::{Arguments, ToolDefinition};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - maps unique tool names to their definitions.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// Fails without modifying the registry if a tool with the same name
    /// is already registered.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        if self.tools.contains_key(definition.name()) {
            warn!("Rejected duplicate tool registration: {}", definition.name());
            return Err(ToolError::duplicate_name(definition.name()));
        }

        info!("Registering tool: {}", definition.name());
        self.tools.insert(definition.name().to_string(), definition);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    ///
    /// Both the STDIO and HTTP transports list tools through this.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(ToolDefinition::to_tool)
            .collect()
    }

    /// Invoke a tool by name.
    ///
    /// `arguments` must be a JSON object, or `null` for tools without
    /// parameters. They are validated against the tool's declared
    /// parameters before the implementation runs.
    #[instrument(skip(self, arguments))]
    pub fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let definition = self.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Arguments::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be a JSON object, got {}",
                    other
                )));
            }
        };

        let result = definition.call(&arguments);
        match &result {
            Ok(_) => debug!("Tool {} completed", name),
            Err(e) => warn!("Tool {} failed: {}", name, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definition::ParamSpec;
    use crate::domains::tools::definitions::{AddTool, BuiltinTool, ToUppercaseTool};
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(AddTool::definition()).unwrap();
        registry.register(ToUppercaseTool::definition()).unwrap();
        registry
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        assert_eq!(registry.tool_names(), vec!["add", "to_uppercase"]);
        assert!(registry.contains("add"));
        assert!(!registry.contains("subtract"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = test_registry();
        let result = registry.register(AddTool::definition().renamed("add", "Another add"));
        assert_eq!(result, Err(ToolError::duplicate_name("add")));

        // The original definition is kept.
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("add").unwrap().description(), AddTool::DESCRIPTION);
    }

    #[test]
    fn test_registry_call_add() {
        let registry = test_registry();
        let result = registry.invoke("add", json!({"a": 2, "b": 3}));
        assert_eq!(result, Ok(json!(5)));
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.invoke("unknown", json!({}));
        assert_eq!(result, Err(ToolError::not_found("unknown")));
    }

    #[test]
    fn test_registry_call_invalid_arguments() {
        let registry = test_registry();

        for args in [
            json!({"a": 2}),
            json!({"a": "2", "b": 3}),
            json!({"a": 1, "b": 2, "c": 3}),
            json!([1, 2]),
            json!(null),
        ] {
            let result = registry.invoke("add", args.clone());
            assert!(
                matches!(result, Err(ToolError::InvalidArguments(_))),
                "expected invalid arguments for {}",
                args
            );
        }
    }

    #[test]
    fn test_registry_add_rejects_oversized_integer() {
        let registry = test_registry();
        let result = registry.invoke("add", json!({"a": u64::MAX, "b": 1}));
        let Err(ToolError::InvalidArguments(message)) = result else {
            panic!("expected invalid arguments, got {:?}", result);
        };
        assert!(message.contains("out of range"), "{}", message);
        assert!(!message.contains("got integer"));
    }

    #[test]
    fn test_registry_null_arguments_for_parameterless_tool() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDefinition::new("ping", "Reply with pong", vec![], |_| {
                Ok(json!("pong"))
            }))
            .unwrap();
        assert_eq!(registry.invoke("ping", Value::Null), Ok(json!("pong")));
    }

    #[test]
    fn test_registry_surfaces_execution_failure() {
        let registry = test_registry();
        let result = registry.invoke("add", json!({"a": i64::MAX, "b": 1}));
        assert!(matches!(result, Err(ToolError::ExecutionFailed(_))));
    }

    #[test]
    fn test_list_tools_sorted_metadata() {
        let mut registry = test_registry();
        registry
            .register(ToolDefinition::new(
                "echo",
                "Echo",
                vec![ParamSpec::string("text", "Text")],
                |args| Ok(args["text"].clone()),
            ))
            .unwrap();

        let tools = registry.list_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, vec!["add", "echo", "to_uppercase"]);
        assert_eq!(tools[0].input_schema["required"], json!(["a", "b"]));
    }
}
