//! Title case conversion tool definition.

use serde_json::{Value, json};

use super::TextParams;
use crate::domains::tools::definition::{Arguments, ParamSpec};
use crate::domains::tools::definitions::{BuiltinTool, parse_params};
use crate::domains::tools::error::ToolError;

/// Convert `text` to title case.
///
/// Words are delimited by whitespace. The first letter of each word is
/// uppercased and every other letter in the word is lowercased; whitespace
/// runs are preserved as-is.
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut seen_letter_in_word = false;

    for c in text.chars() {
        if c.is_whitespace() {
            seen_letter_in_word = false;
            result.push(c);
        } else if c.is_alphabetic() {
            if seen_letter_in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
                seen_letter_in_word = true;
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Title case tool - capitalizes the first letter of every word.
pub struct ToTitleCaseTool;

impl BuiltinTool for ToTitleCaseTool {
    const NAME: &'static str = "to_title_case";

    const DESCRIPTION: &'static str = "Convert text to title case (first letter of each word capitalized).\n\n\
        Use this tool when you need proper title formatting where the first \
        letter of every word is uppercase and remaining letters are lowercase. \
        Also known as \"Title Case\" or \"Proper Case\". Words are separated by whitespace.\n\n\
        Example: to_title_case(\"hello world\") returns \"Hello World\"; \
        to_title_case(\"the quick brown fox\") returns \"The Quick Brown Fox\".";

    fn parameters() -> Vec<ParamSpec> {
        vec![ParamSpec::string("text", "The text to convert to title case")]
    }

    fn call(arguments: &Arguments) -> Result<Value, ToolError> {
        let params: TextParams = parse_params(arguments)?;
        Ok(json!(to_title_case(&params.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::assert_schema_matches;

    #[test]
    fn test_title_case_examples() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_title_case("THE QUICK BROWN FOX"), "The Quick Brown Fox");
        assert_eq!(to_title_case("the quick brown fox"), "The Quick Brown Fox");
    }

    #[test]
    fn test_title_case_preserves_whitespace() {
        assert_eq!(to_title_case("  two\t\twords \n"), "  Two\t\tWords \n");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_title_case_word_starting_with_non_letter() {
        assert_eq!(to_title_case("1st PLACE"), "1St Place");
        assert_eq!(to_title_case("(hello) world"), "(Hello) World");
    }

    #[test]
    fn test_title_case_hyphen_is_not_a_word_boundary() {
        assert_eq!(to_title_case("WELL-KNOWN fact"), "Well-known Fact");
    }

    #[test]
    fn test_non_letters_unchanged() {
        let s = "123 456 !?";
        assert_eq!(to_title_case(s), s);
    }

    #[test]
    fn test_schema_matches_params() {
        assert_schema_matches::<TextParams>(&ToTitleCaseTool::definition());
    }
}
