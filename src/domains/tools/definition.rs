//! Tool definition types.
//!
//! A [`ToolDefinition`] binds a tool name to its documentation, an explicit
//! parameter schema and the function implementing it. Schemas are declared
//! by hand next to each tool; nothing is inferred from Rust types.

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

use super::error::ToolError;

/// Arguments passed to a tool: argument name to JSON value.
pub type Arguments = serde_json::Map<String, Value>;

/// The callable behind a tool.
///
/// Implementations must be pure: the same arguments always produce the
/// same result and nothing outside the call is touched.
pub type ToolFn = Arc<dyn Fn(&Arguments) -> Result<Value, ToolError> + Send + Sync>;

/// Primitive types a tool parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// A signed 64-bit integer (JSON number without fraction).
    Integer,
    /// A UTF-8 string.
    String,
}

impl ParamType {
    /// The JSON Schema type name for this parameter type.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    /// Check whether a JSON value is an instance of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.as_i64().is_some(),
            Self::String => value.is_string(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_type())
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamType,
    pub description: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamType::Integer, description)
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamType::String, description)
    }
}

/// A registered tool: metadata, parameter schema and implementation.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    parameters: Vec<ParamSpec>,
    implementation: ToolFn,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParamSpec>,
        implementation: F,
    ) -> Self
    where
        F: Fn(&Arguments) -> Result<Value, ToolError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            implementation: Arc::new(implementation),
        }
    }

    /// Expose the same implementation and parameters under another name
    /// and description.
    pub fn renamed(&self, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: self.parameters.clone(),
            implementation: self.implementation.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ParamSpec] {
        &self.parameters
    }

    /// Check arguments against the declared parameters.
    ///
    /// Every declared parameter must be present with the declared type, and
    /// no undeclared argument may be supplied.
    pub fn validate(&self, arguments: &Arguments) -> Result<(), ToolError> {
        for param in &self.parameters {
            match arguments.get(&param.name) {
                None => {
                    return Err(ToolError::invalid_arguments(format!(
                        "missing required parameter '{}'",
                        param.name
                    )));
                }
                Some(value) if param.kind == ParamType::Integer && is_out_of_range(value) => {
                    return Err(ToolError::invalid_arguments(format!(
                        "parameter '{}' is out of range for a 64-bit signed integer",
                        param.name
                    )));
                }
                Some(value) if !param.kind.accepts(value) => {
                    return Err(ToolError::invalid_arguments(format!(
                        "parameter '{}' must be of type {}, got {}",
                        param.name,
                        param.kind,
                        json_type_name(value)
                    )));
                }
                Some(_) => {}
            }
        }

        if let Some(unexpected) = arguments
            .keys()
            .find(|key| !self.parameters.iter().any(|p| &p.name == *key))
        {
            return Err(ToolError::invalid_arguments(format!(
                "unexpected parameter '{}' (tool '{}' accepts {} parameter(s))",
                unexpected,
                self.name,
                self.parameters.len()
            )));
        }

        Ok(())
    }

    /// Validate the arguments and run the implementation.
    pub fn call(&self, arguments: &Arguments) -> Result<Value, ToolError> {
        self.validate(arguments)?;
        (self.implementation)(arguments)
    }

    /// JSON Schema object describing the tool input.
    pub fn input_schema(&self) -> JsonObject {
        let properties: serde_json::Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({
                        "type": p.kind.schema_type(),
                        "description": p.description,
                    }),
                )
            })
            .collect();
        let required: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        schema
    }

    /// Create the MCP Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// An integral JSON number too large for `i64`.
fn is_out_of_range(value: &Value) -> bool {
    value.is_u64() && value.as_i64().is_none()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_definition() -> ToolDefinition {
        ToolDefinition::new(
            "echo",
            "Echo the text back",
            vec![ParamSpec::string("text", "Text to echo")],
            |args| Ok(args["text"].clone()),
        )
    }

    fn args(value: Value) -> Arguments {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_param_type_accepts() {
        assert!(ParamType::Integer.accepts(&json!(3)));
        assert!(ParamType::Integer.accepts(&json!(-3)));
        assert!(!ParamType::Integer.accepts(&json!(2.5)));
        assert!(!ParamType::Integer.accepts(&json!("3")));
        assert!(!ParamType::Integer.accepts(&json!(true)));
        assert!(ParamType::String.accepts(&json!("")));
        assert!(!ParamType::String.accepts(&json!(null)));
    }

    #[test]
    fn test_call_valid() {
        let def = echo_definition();
        assert_eq!(def.call(&args(json!({"text": "hi"}))).unwrap(), json!("hi"));
    }

    #[test]
    fn test_missing_parameter() {
        let err = echo_definition().call(&Arguments::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("text")));
    }

    #[test]
    fn test_wrong_type() {
        let err = echo_definition()
            .call(&args(json!({"text": 42})))
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::invalid_arguments("parameter 'text' must be of type string, got integer")
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        let def = ToolDefinition::new(
            "count",
            "Count",
            vec![ParamSpec::integer("n", "A number")],
            |args| Ok(args["n"].clone()),
        );
        let err = def.call(&args(json!({"n": u64::MAX}))).unwrap_err();
        assert_eq!(
            err,
            ToolError::invalid_arguments("parameter 'n' is out of range for a 64-bit signed integer")
        );
        assert_eq!(
            def.call(&args(json!({"n": i64::MAX}))).unwrap(),
            json!(i64::MAX)
        );
    }

    #[test]
    fn test_unexpected_parameter() {
        let err = echo_definition()
            .call(&args(json!({"text": "a", "extra": 1})))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(ref m) if m.contains("extra")));
    }

    #[test]
    fn test_input_schema() {
        let schema = echo_definition().input_schema();
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"]["text"]["type"], json!("string"));
        assert_eq!(schema["required"], json!(["text"]));
    }

    #[test]
    fn test_renamed_shares_implementation() {
        let renamed = echo_definition().renamed("say", "Say it");
        assert_eq!(renamed.name(), "say");
        assert_eq!(renamed.description(), "Say it");
        assert_eq!(renamed.call(&args(json!({"text": "x"}))).unwrap(), json!("x"));
    }

    #[test]
    fn test_to_tool() {
        let tool = echo_definition().to_tool();
        assert_eq!(tool.name, "echo");
        assert_eq!(tool.description.as_deref(), Some("Echo the text back"));
        assert_eq!(tool.input_schema["required"], json!(["text"]));
    }
}
