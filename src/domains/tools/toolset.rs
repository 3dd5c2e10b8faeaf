//! Toolsets - named selections of tools registered at startup.
//!
//! The same tool implementations can be published under different names
//! and documentation. The `text-vague` toolset exposes the text tools with
//! deliberately uninformative names and one-line descriptions, which makes
//! it easy to compare how clients pick tools with and without good docs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use super::definitions::{
    AddTool, BuiltinTool, CapitalizeFirstTool, ToLowercaseTool, ToTitleCaseTool, ToUppercaseTool,
};
use super::error::ToolError;
use super::registry::ToolRegistry;

/// The selection of tools a server instance exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Toolset {
    /// Only the `add` tool.
    Demo,
    /// The four well-documented text case tools.
    Text,
    /// The text case tools under vague names and descriptions.
    TextVague,
    /// `add` plus the well-documented text tools.
    #[default]
    All,
}

impl Toolset {
    /// The server name reported to clients for this toolset.
    pub fn server_name(self) -> &'static str {
        match self {
            Self::Demo => "Demo",
            Self::Text => "TextProcessing-Good",
            Self::TextVague => "TextProcessing-Bad",
            Self::All => "text-tools",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Text => "text",
            Self::TextVague => "text-vague",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toolset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "text" => Ok(Self::Text),
            "text-vague" | "text_vague" => Ok(Self::TextVague),
            "all" => Ok(Self::All),
            other => Err(format!("unknown toolset '{}'", other)),
        }
    }
}

/// Build a registry populated with the tools of `toolset`.
pub fn build_registry(toolset: Toolset) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();

    match toolset {
        Toolset::Demo => {
            registry.register(AddTool::definition())?;
        }
        Toolset::Text => register_text_tools(&mut registry)?,
        Toolset::TextVague => register_vague_text_tools(&mut registry)?,
        Toolset::All => {
            registry.register(AddTool::definition())?;
            register_text_tools(&mut registry)?;
        }
    }

    info!("Toolset '{}' ready with {} tools", toolset, registry.len());
    Ok(registry)
}

fn register_text_tools(registry: &mut ToolRegistry) -> Result<(), ToolError> {
    registry.register(ToUppercaseTool::definition())?;
    registry.register(ToLowercaseTool::definition())?;
    registry.register(ToTitleCaseTool::definition())?;
    registry.register(CapitalizeFirstTool::definition())?;
    Ok(())
}

fn register_vague_text_tools(registry: &mut ToolRegistry) -> Result<(), ToolError> {
    registry.register(ToUppercaseTool::definition().renamed("process", "Process text"))?;
    registry.register(ToLowercaseTool::definition().renamed("transform", "Transform text"))?;
    registry.register(ToTitleCaseTool::definition().renamed("convert", "Convert text"))?;
    registry.register(CapitalizeFirstTool::definition().renamed("format_text", "Format text"))?;
    Ok(())
}
