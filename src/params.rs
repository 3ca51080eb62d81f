//! MCP parameter types for the workflow query tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for list_workflows tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListWorkflowsParams {
    /// Workflow status to filter by (running, completed, failed)
    pub status: String,
}

/// Parameters for describe_workflow tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DescribeWorkflowParams {
    /// Workflow ID of the execution to describe
    pub workflow_id: String,

    /// Optional Run ID (if not provided, the latest run is used)
    #[serde(default)]
    pub run_id: Option<String>,
}
