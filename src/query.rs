//! Query facade over the Temporal backend
//!
//! Maps a classified status intent to the matching backend query and wraps
//! backend failures with query context. Results are bounded to a single page
//! and kept in backend order; an empty result is a valid outcome.

use crate::client::TemporalBackend;
use crate::types::{CloseStatusFilter, ExecutionInfo, QueryError, StatusIntent};

/// Single-page bound on list queries; no continuation token is followed.
pub const MAX_PAGE_SIZE: usize = 100;

/// List executions matching the given intent.
///
/// `Running` queries open executions; `Completed` and `Failed` query closed
/// executions with the corresponding status sub-filter, so unrelated closed
/// executions are never mixed in.
pub async fn list_executions(
    backend: &dyn TemporalBackend,
    intent: StatusIntent,
) -> Result<Vec<ExecutionInfo>, QueryError> {
    let result = match intent {
        StatusIntent::Running => backend.list_open(MAX_PAGE_SIZE).await,
        StatusIntent::Completed => {
            backend
                .list_closed(CloseStatusFilter::Completed, MAX_PAGE_SIZE)
                .await
        }
        StatusIntent::Failed => {
            backend
                .list_closed(CloseStatusFilter::Failed, MAX_PAGE_SIZE)
                .await
        }
    };

    result.map_err(|source| QueryError::ListFailed {
        namespace: backend.namespace().to_string(),
        intent,
        source,
    })
}

/// Look up one execution by workflow id, optionally pinned to a run id.
///
/// When `run_id` is `None` the backend resolves the latest run. A backend
/// success with no execution payload is treated the same as not found.
pub async fn describe_execution(
    backend: &dyn TemporalBackend,
    workflow_id: &str,
    run_id: Option<&str>,
) -> Result<ExecutionInfo, QueryError> {
    let found = backend
        .describe(workflow_id, run_id)
        .await
        .map_err(|source| QueryError::DescribeFailed {
            workflow_id: workflow_id.to_string(),
            run_id: run_id.map(str::to_string),
            source,
        })?;

    found.ok_or_else(|| QueryError::NotFound {
        workflow_id: workflow_id.to_string(),
    })
}
