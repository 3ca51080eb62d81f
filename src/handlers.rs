//! Handler implementations for the workflow query tools
//!
//! Each handler validates its parameters, runs the query facade against the
//! backend, and renders the result. Every failure is converted into a
//! caller-visible error result; handlers never return a protocol error for a
//! bad invocation.

use rmcp::{model::CallToolResult, ErrorData as McpError};

use crate::client::TemporalBackend;
use crate::params::{DescribeWorkflowParams, ListWorkflowsParams};
use crate::query;
use crate::render;
use crate::result::{text_error, text_success};
use crate::types::{QueryError, StatusIntent};

pub async fn list_workflows(
    backend: &dyn TemporalBackend,
    params: ListWorkflowsParams,
) -> Result<CallToolResult, McpError> {
    if params.status.trim().is_empty() {
        return Ok(text_error("Missing or invalid 'status' parameter"));
    }

    let intent: StatusIntent = match params.status.parse() {
        Ok(intent) => intent,
        Err(e) => return Ok(text_error(e.to_string())),
    };

    match query::list_executions(backend, intent).await {
        Ok(executions) => Ok(text_success(render::render_list(intent.label(), &executions))),
        Err(e) => {
            tracing::error!(
                namespace = backend.namespace(),
                intent = intent.label(),
                "Error listing workflows: {e:#}"
            );
            Ok(text_error(e.to_string()))
        }
    }
}

pub async fn describe_workflow(
    backend: &dyn TemporalBackend,
    params: DescribeWorkflowParams,
) -> Result<CallToolResult, McpError> {
    if params.workflow_id.trim().is_empty() {
        return Ok(text_error("Missing or invalid 'workflow_id' parameter"));
    }

    match query::describe_execution(backend, &params.workflow_id, params.run_id.as_deref()).await {
        Ok(info) => Ok(text_success(render::render_detail(&info))),
        Err(e @ QueryError::NotFound { .. }) => Ok(text_error(e.to_string())),
        Err(e) => {
            tracing::error!(
                workflow_id = %params.workflow_id,
                run_id = params.run_id.as_deref().unwrap_or(""),
                "Error describing workflow: {e:#}"
            );
            Ok(text_error(e.to_string()))
        }
    }
}
