//! MCP Server implementation for Temporal workflow queries
//!
//! Exposes the two query tools over the backend handle injected at
//! construction. The handle is shared by all in-flight invocations; each
//! invocation is an independent request/response cycle.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::TemporalBackend;
use crate::handlers;
use crate::params::{DescribeWorkflowParams, ListWorkflowsParams};

/// The Temporal MCP Server
#[derive(Clone)]
pub struct TemporalMcpServer {
    backend: Arc<dyn TemporalBackend>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl TemporalMcpServer {
    /// Create a server over an established backend connection.
    pub fn new(backend: Arc<dyn TemporalBackend>) -> Self {
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List Temporal workflows filtered by status (running, completed, or failed)"
    )]
    async fn list_workflows(
        &self,
        Parameters(params): Parameters<ListWorkflowsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_workflows(self.backend.as_ref(), params).await
    }

    #[tool(description = "Retrieve detailed information about a specific workflow execution")]
    async fn describe_workflow(
        &self,
        Parameters(params): Parameters<DescribeWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::describe_workflow(self.backend.as_ref(), params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TemporalMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Temporal MCP server for querying workflow executions. \
                 List workflows by status (running, completed, failed) or describe a \
                 single execution by workflow ID and optional run ID."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
