//! Sentence capitalization tool definition.

use serde_json::{Value, json};

use super::TextParams;
use crate::domains::tools::definition::{Arguments, ParamSpec};
use crate::domains::tools::definitions::{BuiltinTool, parse_params};
use crate::domains::tools::error::ToolError;

/// Uppercase the first character of `text` and lowercase the rest.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize tool - sentence-style capitalization of the whole text.
pub struct CapitalizeFirstTool;

impl BuiltinTool for CapitalizeFirstTool {
    const NAME: &'static str = "capitalize_first";

    const DESCRIPTION: &'static str = "Capitalize only the first letter of the text.\n\n\
        Use this tool when you need sentence-style capitalization where only \
        the very first letter is uppercase and everything else is lowercase. \
        Different from title case which capitalizes every word.\n\n\
        Example: capitalize_first(\"hello world\") returns \"Hello world\"; \
        capitalize_first(\"HELLO WORLD\") returns \"Hello world\".";

    fn parameters() -> Vec<ParamSpec> {
        vec![ParamSpec::string("text", "The text to capitalize")]
    }

    fn call(arguments: &Arguments) -> Result<Value, ToolError> {
        let params: TextParams = parse_params(arguments)?;
        Ok(json!(capitalize_first(&params.text)))
    }
}
