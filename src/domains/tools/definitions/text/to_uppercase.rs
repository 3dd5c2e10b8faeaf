//! Uppercase conversion tool definition.

use serde_json::{Value, json};

use super::TextParams;
use crate::domains::tools::definition::{Arguments, ParamSpec};
use crate::domains::tools::definitions::{BuiltinTool, parse_params};
use crate::domains::tools::error::ToolError;

/// Convert every letter of `text` to uppercase.
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Uppercase tool - converts all letters to capitals.
pub struct ToUppercaseTool;

impl BuiltinTool for ToUppercaseTool {
    const NAME: &'static str = "to_uppercase";

    const DESCRIPTION: &'static str = "Convert all letters in text to uppercase (capital letters).\n\n\
        Use this tool when you need text in ALL CAPS format. Every lowercase \
        letter becomes uppercase, while numbers and symbols remain unchanged.\n\n\
        Example: to_uppercase(\"hello world\") returns \"HELLO WORLD\"; \
        to_uppercase(\"Hello World 123!\") returns \"HELLO WORLD 123!\".";

    fn parameters() -> Vec<ParamSpec> {
        vec![ParamSpec::string("text", "The text to convert to uppercase")]
    }

    fn call(arguments: &Arguments) -> Result<Value, ToolError> {
        let params: TextParams = parse_params(arguments)?;
        Ok(json!(to_uppercase(&params.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::assert_schema_matches;
    use crate::domains::tools::definitions::text::to_lowercase::to_lowercase;

    const SAMPLES: &[&str] = &[
        "",
        "hello world",
        "Hello World 123!",
        "MiXeD cAsE",
        "straße",
        "  tabs\tand\nnewlines  ",
    ];

    #[test]
    fn test_to_uppercase_examples() {
        assert_eq!(to_uppercase("hello world"), "HELLO WORLD");
        assert_eq!(to_uppercase("Hello World 123!"), "HELLO WORLD 123!");
        assert_eq!(to_uppercase("straße"), "STRASSE");
    }

    #[test]
    fn test_to_uppercase_idempotent() {
        for s in SAMPLES {
            let once = to_uppercase(s);
            assert_eq!(to_uppercase(&once), once);
        }
    }

    #[test]
    fn test_uppercase_after_lowercase() {
        for s in SAMPLES {
            assert_eq!(to_uppercase(&to_lowercase(s)), to_uppercase(s));
        }
    }

    #[test]
    fn test_non_letters_unchanged() {
        let s = "0123456789 !@#$%^&*()_+-=[]{};':\",./<>?\t\n";
        assert_eq!(to_uppercase(s), s);
    }

    #[test]
    fn test_schema_matches_params() {
        assert_schema_matches::<TextParams>(&ToUppercaseTool::definition());
    }
}
