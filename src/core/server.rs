//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolRegistry`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered into a `ToolRegistry` by `domains/tools/toolset.rs`. The
//! same registry serves the STDIO transport (through `ServerHandler`) and
//! the HTTP transport (through `list_tools_json` / `call_tool`).
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ToolError, ToolRegistry, build_registry};

/// Instructions sent to clients during initialization.
const INSTRUCTIONS: &str = "This server exposes small, pure tools: integer arithmetic and \
     text case conversion. Call tools/list to see each tool's documentation and parameters.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and answers
/// tool requests from a registry that is read-only after startup.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The tools exposed by this server.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server serving the given registry.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Create a server with the registry of the configured toolset.
    pub fn from_config(config: Config) -> Result<Self> {
        let registry = build_registry(config.tools.toolset)?;
        Ok(Self::new(config, registry))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        self.config.server_name()
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Instructions reported to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name.
    ///
    /// Unknown tools and invalid arguments are returned as errors: the
    /// request itself was wrong. A tool that fails while running produces a
    /// result flagged `is_error`, so clients can show the failure to the model.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        match self.registry.invoke(name, arguments) {
            Ok(value) => Ok(tool_result(value)),
            Err(ToolError::ExecutionFailed(msg)) => {
                warn!("Tool {} reported an error: {}", name, msg);
                Ok(CallToolResult::error(vec![Content::text(msg)]))
            }
            Err(e) => Err(e),
        }
    }
}

/// Wrap a tool's return value as a successful MCP tool result.
///
/// Strings are returned verbatim as text; other values use their JSON
/// rendering. The value is also attached as structured content under
/// `result`.
fn tool_result(value: Value) -> CallToolResult {
    let text = match &value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(json!({ "result": value }));
    result
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        McpServer::call_tool(self, &request.name, arguments)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::Toolset;

    fn test_server(toolset: Toolset) -> McpServer {
        let mut config = Config::default();
        config.tools.toolset = toolset;
        McpServer::from_config(config).unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_server_lists_registry_tools() {
        let server = test_server(Toolset::All);
        let listed = server.list_tools_json();
        assert_eq!(listed.len(), server.registry().len());

        let names: Vec<_> = listed.iter().filter_map(|t| t["name"].as_str()).collect();
        assert_eq!(names, server.registry().tool_names());
        assert!(listed[0]["inputSchema"]["properties"].is_object());
    }

    #[test]
    fn test_call_tool_integer_result() {
        let server = test_server(Toolset::Demo);
        let result = server.call_tool("add", json!({"a": 2, "b": 3})).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "5");
        assert_eq!(result.structured_content, Some(json!({"result": 5})));
    }

    #[test]
    fn test_call_tool_string_result() {
        let server = test_server(Toolset::Text);
        let result = server
            .call_tool("to_title_case", json!({"text": "hello world"}))
            .unwrap();
        assert_eq!(text_of(&result), "Hello World");
    }

    #[test]
    fn test_call_tool_execution_failure_is_flagged() {
        let server = test_server(Toolset::Demo);
        let result = server
            .call_tool("add", json!({"a": i64::MAX, "b": 1}))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("overflow"));
    }

    #[test]
    fn test_call_tool_request_errors() {
        let server = test_server(Toolset::Demo);
        assert!(matches!(
            server.call_tool("to_uppercase", json!({"text": "x"})),
            Err(ToolError::NotFound(_))
        ));
        assert!(matches!(
            server.call_tool("add", json!({"a": 1})),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let server = test_server(Toolset::Demo);
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "Demo");
    }
}
