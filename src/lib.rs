//! Temporal MCP Server
//!
//! Exposes read-only query tools over a Temporal cluster via the MCP protocol.
//!
//! # Tools
//!
//! - `list_workflows` - List workflow executions filtered by status
//!   (running, completed, or failed)
//! - `describe_workflow` - Retrieve detailed information about a specific
//!   workflow execution
//!
//! # Architecture
//!
//! - `config` - Connection settings from environment variables
//! - `types` - Unified execution record, status enums, query errors
//! - `client` - Backend abstraction and the Temporal HTTP API client
//! - `query` - Query facade mapping status intents to backend queries
//! - `render` - Deterministic text rendering of executions
//! - `params` - MCP parameter types
//! - `handlers` - MCP tool handlers
//! - `server` - MCP server implementation

pub mod client;
pub mod config;
pub mod handlers;
pub mod init;
pub mod params;
pub mod query;
pub mod render;
pub mod result;
pub mod server;
pub mod types;

// Re-export core types for convenience
pub use types::{CloseStatusFilter, ExecutionInfo, QueryError, StatusIntent, WorkflowStatus};
