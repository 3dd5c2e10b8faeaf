//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are pure functions that MCP clients call by name with JSON
//! arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `definition.rs` - Tool definition and parameter schema types
//! - `registry.rs` - Name-keyed registry, validation and dispatch
//! - `toolset.rs` - Named tool selections registered at startup
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `BuiltinTool`: name, description, parameters, call
//! 3. Export in `definitions/mod.rs`
//! 4. Register it in a toolset in `toolset.rs`
//!
//! **No need to modify `server.rs` or the transports!**

pub mod definition;
pub mod definitions;
mod error;
mod registry;
pub mod toolset;

pub use definition::{Arguments, ParamSpec, ParamType, ToolDefinition, ToolFn};
pub use definitions::BuiltinTool;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use toolset::{Toolset, build_registry};
