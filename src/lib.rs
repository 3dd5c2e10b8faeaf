//! Text Tools MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing small,
//! pure tools: integer addition and text case conversion.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool definitions, the tool registry and toolsets
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use text_tools_mcp_server::domains::tools::{Toolset, build_registry};
//!
//! let registry = build_registry(Toolset::All).unwrap();
//! assert_eq!(registry.invoke("add", json!({"a": 2, "b": 3})).unwrap(), json!(5));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
