//! Temporal MCP Server
//!
//! Serves two read-only query tools over a Temporal cluster:
//! - List workflow executions filtered by status
//! - Describe a single workflow execution
//!
//! Connection settings come from TEMPORAL_ADDRESS and TEMPORAL_NAMESPACE;
//! a failed backend connection at startup is fatal.

use rmcp::{transport::io::stdio, ServiceExt};
use std::sync::Arc;

use temporal_mcp::client::TemporalClient;
use temporal_mcp::config::TemporalConfig;
use temporal_mcp::server::TemporalMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    temporal_mcp::init::init_tracing("temporal_mcp")?;

    let config = TemporalConfig::from_env();
    tracing::info!(
        "Connecting to Temporal at {} (namespace: {})",
        config.address,
        config.namespace
    );

    // No tool is served without a working backend connection
    let client = TemporalClient::connect(&config).await?;
    tracing::info!("Connected to Temporal, starting temporal-mcp server");

    let server = TemporalMcpServer::new(Arc::new(client));
    let service = server.serve(stdio()).await?;

    tracing::info!("Temporal MCP server running");

    service.waiting().await?;

    tracing::info!("Temporal MCP server stopped");

    Ok(())
}
