//! Lowercase conversion tool definition.

use serde_json::{Value, json};

use super::TextParams;
use crate::domains::tools::definition::{Arguments, ParamSpec};
use crate::domains::tools::definitions::{BuiltinTool, parse_params};
use crate::domains::tools::error::ToolError;

/// Convert every letter of `text` to lowercase.
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase tool - converts all letters to small letters.
pub struct ToLowercaseTool;

impl BuiltinTool for ToLowercaseTool {
    const NAME: &'static str = "to_lowercase";

    const DESCRIPTION: &'static str = "Convert all letters in text to lowercase (small letters).\n\n\
        Use this tool when you need text in all lowercase format. Every uppercase \
        letter becomes lowercase, while numbers and symbols remain unchanged.\n\n\
        Example: to_lowercase(\"HELLO WORLD\") returns \"hello world\"; \
        to_lowercase(\"Hello World 123!\") returns \"hello world 123!\".";

    fn parameters() -> Vec<ParamSpec> {
        vec![ParamSpec::string("text", "The text to convert to lowercase")]
    }

    fn call(arguments: &Arguments) -> Result<Value, ToolError> {
        let params: TextParams = parse_params(arguments)?;
        Ok(json!(to_lowercase(&params.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::assert_schema_matches;

    #[test]
    fn test_to_lowercase_examples() {
        assert_eq!(to_lowercase("HELLO WORLD"), "hello world");
        assert_eq!(to_lowercase("Hello World 123!"), "hello world 123!");
    }

    #[test]
    fn test_to_lowercase_idempotent() {
        for s in ["", "ABC def", "ÀÉÎ", "Σίσυφος"] {
            let once = to_lowercase(s);
            assert_eq!(to_lowercase(&once), once);
        }
    }

    #[test]
    fn test_non_letters_unchanged() {
        let s = "42 + 58 = 100; ok?";
        assert_eq!(to_lowercase(s), s);
    }

    #[test]
    fn test_call_through_definition() {
        let args = json!({"text": "ABC"}).as_object().cloned().unwrap();
        assert_eq!(ToLowercaseTool::definition().call(&args).unwrap(), json!("abc"));
    }

    #[test]
    fn test_schema_matches_params() {
        assert_schema_matches::<TextParams>(&ToLowercaseTool::definition());
    }
}
