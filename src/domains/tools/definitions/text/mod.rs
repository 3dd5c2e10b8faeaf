//! Text case conversion tools.
//!
//! All case mapping is Unicode-aware: a single character may map to
//! several (`ß` becomes `SS` in uppercase). Characters without case
//! (digits, punctuation, whitespace) pass through unchanged.

pub mod capitalize_first;
pub mod to_lowercase;
pub mod to_title_case;
pub mod to_uppercase;

pub use capitalize_first::CapitalizeFirstTool;
pub use to_lowercase::ToLowercaseTool;
pub use to_title_case::ToTitleCaseTool;
pub use to_uppercase::ToUppercaseTool;

use serde::Deserialize;

/// Parameters shared by every text tool.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(schemars::JsonSchema))]
pub struct TextParams {
    /// The text to transform.
    pub text: String,
}
