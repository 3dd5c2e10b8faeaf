//! Addition tool definition.
//!
//! A tool that adds two integers.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::domains::tools::definition::{Arguments, ParamSpec};
use crate::domains::tools::definitions::{BuiltinTool, parse_params};
use crate::domains::tools::error::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(schemars::JsonSchema))]
pub struct AddParams {
    /// First addend.
    pub a: i64,

    /// Second addend.
    pub b: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add tool - returns the sum of two integers.
pub struct AddTool;

impl AddTool {
    /// Add two integers, failing instead of wrapping on overflow.
    pub fn execute(params: &AddParams) -> Result<i64, ToolError> {
        params.a.checked_add(params.b).ok_or_else(|| {
            ToolError::execution_failed(format!(
                "integer overflow adding {} and {}",
                params.a, params.b
            ))
        })
    }
}

impl BuiltinTool for AddTool {
    const NAME: &'static str = "add";

    const DESCRIPTION: &'static str = "Add two integers and return their sum.\n\n\
        Use this tool for exact integer addition. Both arguments must be whole \
        numbers; negative values are allowed.\n\n\
        Example: add(2, 3) returns 5, add(-1, 1) returns 0.";

    fn parameters() -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("a", "First addend"),
            ParamSpec::integer("b", "Second addend"),
        ]
    }

    #[instrument(skip_all)]
    fn call(arguments: &Arguments) -> Result<Value, ToolError> {
        let params: AddParams = parse_params(arguments)?;
        let sum = Self::execute(&params)?;
        debug!("add({}, {}) = {}", params.a, params.b, sum);
        Ok(json!(sum))
    }
}

// ============================================================================
// Tests
// ============================================================================
