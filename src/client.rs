//! Temporal backend access
//!
//! `TemporalBackend` is the narrow seam the query facade talks through, so
//! tests can substitute an in-memory backend. `TemporalClient` is the real
//! implementation over the Temporal server HTTP API
//! (`/api/v1/namespaces/{namespace}/...`), which mirrors the WorkflowService
//! visibility and describe operations.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::TemporalConfig;
use crate::types::{CloseStatusFilter, ExecutionInfo, WorkflowStatus};

/// Trait for the workflow backend the query facade calls into
#[async_trait]
pub trait TemporalBackend: Send + Sync {
    /// Namespace this handle is scoped to
    fn namespace(&self) -> &str;

    /// List open (currently running) executions, bounded to a single page.
    async fn list_open(&self, max_page_size: usize) -> Result<Vec<ExecutionInfo>>;

    /// List closed executions matching the status sub-filter, single page.
    async fn list_closed(
        &self,
        filter: CloseStatusFilter,
        max_page_size: usize,
    ) -> Result<Vec<ExecutionInfo>>;

    /// Look up one execution. `run_id` of `None` resolves the latest run.
    /// Returns `Ok(None)` when the backend has no such execution.
    async fn describe(
        &self,
        workflow_id: &str,
        run_id: Option<&str>,
    ) -> Result<Option<ExecutionInfo>>;
}

/// Client for the Temporal server HTTP API
pub struct TemporalClient {
    http: Client,
    base: Url,
    namespace: String,
}

impl TemporalClient {
    /// Connect to the Temporal server and verify the namespace is reachable.
    ///
    /// Failure here is fatal to the process; no tool is served without a
    /// working backend connection.
    pub async fn connect(config: &TemporalConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent("temporal-mcp/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        let base = Url::parse(&config.base_url())
            .with_context(|| format!("Invalid Temporal address '{}'", config.address))?;

        let client = Self {
            http,
            base,
            namespace: config.namespace.clone(),
        };

        let url = client.api_url(&[])?;
        let response = client.http.get(url).send().await.with_context(|| {
            format!(
                "Unable to connect to Temporal at {} (namespace {})",
                config.address, config.namespace
            )
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Temporal rejected namespace '{}': {} {}",
                client.namespace,
                status,
                text
            ));
        }

        Ok(client)
    }

    /// Build an API URL under `/api/v1/namespaces/{namespace}`.
    ///
    /// Namespaces and workflow ids may contain `/`, `?`, or spaces; each
    /// segment is percent-encoded so such values stay one path segment.
    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| anyhow!("Temporal address cannot carry a path"))?;
            path.pop_if_empty();
            path.extend(["api", "v1", "namespaces", self.namespace.as_str()]);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn list(&self, query: &str, max_page_size: usize) -> Result<Vec<ExecutionInfo>> {
        let url = self.api_url(&["workflows"])?;

        let response = self
            .http
            .get(url)
            .query(&[("query", query), ("pageSize", &max_page_size.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Temporal API error {}: {}", status, text));
        }

        let list_response: ListWorkflowExecutionsResponse = response.json().await?;

        Ok(list_response
            .executions
            .into_iter()
            .map(ExecutionInfo::from)
            .collect())
    }
}

#[async_trait]
impl TemporalBackend for TemporalClient {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn list_open(&self, max_page_size: usize) -> Result<Vec<ExecutionInfo>> {
        self.list("ExecutionStatus=\"Running\"", max_page_size).await
    }

    async fn list_closed(
        &self,
        filter: CloseStatusFilter,
        max_page_size: usize,
    ) -> Result<Vec<ExecutionInfo>> {
        let query = match filter {
            CloseStatusFilter::Completed => "ExecutionStatus=\"Completed\"",
            CloseStatusFilter::Failed => "ExecutionStatus=\"Failed\"",
        };
        self.list(query, max_page_size).await
    }

    async fn describe(
        &self,
        workflow_id: &str,
        run_id: Option<&str>,
    ) -> Result<Option<ExecutionInfo>> {
        let url = self.api_url(&["workflows", workflow_id])?;

        let mut request = self.http.get(url);
        if let Some(run_id) = run_id {
            request = request.query(&[("execution.runId", run_id)]);
        }

        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Temporal API error {}: {}", status, text));
        }

        let describe_response: DescribeWorkflowExecutionResponse = response.json().await?;

        // A success response with no execution payload is treated as not found
        Ok(describe_response
            .workflow_execution_info
            .map(ExecutionInfo::from))
    }
}

// Temporal HTTP API response types (proto-JSON)

#[derive(Debug, Deserialize)]
struct ListWorkflowExecutionsResponse {
    #[serde(default)]
    executions: Vec<WireExecutionInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescribeWorkflowExecutionResponse {
    workflow_execution_info: Option<WireExecutionInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireExecutionInfo {
    execution: WireExecution,
    #[serde(rename = "type")]
    workflow_type: WireWorkflowType,
    #[serde(default)]
    status: String,
    start_time: DateTime<Utc>,
    #[serde(default)]
    close_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireExecution {
    workflow_id: String,
    run_id: String,
}

#[derive(Debug, Deserialize)]
struct WireWorkflowType {
    name: String,
}

impl From<WireExecutionInfo> for ExecutionInfo {
    fn from(wire: WireExecutionInfo) -> Self {
        let status = WorkflowStatus::from_proto(&wire.status);
        ExecutionInfo {
            workflow_id: wire.execution.workflow_id,
            run_id: wire.execution.run_id,
            workflow_type: wire.workflow_type.name,
            status,
            start_time: wire.start_time,
            // A non-terminal execution has no close time, whatever the wire says
            close_time: wire.close_time.filter(|_| status.is_terminal()),
        }
    }
}
