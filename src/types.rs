//! Type definitions for temporal-mcp
//!
//! The unified execution record, the status enums on both sides of the query
//! boundary, and the query error taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing a StatusIntent from a raw status keyword
#[derive(Debug, Clone)]
pub struct InvalidStatusError(pub String);

impl fmt::Display for InvalidStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported status '{}' (use running, completed, or failed)",
            self.0
        )
    }
}

impl std::error::Error for InvalidStatusError {}

/// Query intent classified from the caller-supplied status keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIntent {
    Running,
    Completed,
    Failed,
}

impl StatusIntent {
    /// Lowercase label used in rendered output and error messages
    pub fn label(&self) -> &'static str {
        match self {
            StatusIntent::Running => "running",
            StatusIntent::Completed => "completed",
            StatusIntent::Failed => "failed",
        }
    }
}

impl fmt::Display for StatusIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusIntent {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" => Ok(StatusIntent::Running),
            "completed" => Ok(StatusIntent::Completed),
            "failed" => Ok(StatusIntent::Failed),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}

/// Status sub-filter for closed-execution queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStatusFilter {
    Completed,
    Failed,
}

/// Status of a workflow execution as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowStatus {
    Running,
    Completed,
    Failed,
    Canceled,
    Terminated,
    ContinuedAsNew,
    TimedOut,
    /// Fallback for backend status values this build does not know about
    Unknown,
}

impl WorkflowStatus {
    /// Map the backend's proto enum string to a status value.
    pub fn from_proto(value: &str) -> Self {
        match value {
            "WORKFLOW_EXECUTION_STATUS_RUNNING" => WorkflowStatus::Running,
            "WORKFLOW_EXECUTION_STATUS_COMPLETED" => WorkflowStatus::Completed,
            "WORKFLOW_EXECUTION_STATUS_FAILED" => WorkflowStatus::Failed,
            "WORKFLOW_EXECUTION_STATUS_CANCELED" => WorkflowStatus::Canceled,
            "WORKFLOW_EXECUTION_STATUS_TERMINATED" => WorkflowStatus::Terminated,
            "WORKFLOW_EXECUTION_STATUS_CONTINUED_AS_NEW" => WorkflowStatus::ContinuedAsNew,
            "WORKFLOW_EXECUTION_STATUS_TIMED_OUT" => WorkflowStatus::TimedOut,
            _ => WorkflowStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Running => "Running",
            WorkflowStatus::Completed => "Completed",
            WorkflowStatus::Failed => "Failed",
            WorkflowStatus::Canceled => "Canceled",
            WorkflowStatus::Terminated => "Terminated",
            WorkflowStatus::ContinuedAsNew => "ContinuedAsNew",
            WorkflowStatus::TimedOut => "TimedOut",
            WorkflowStatus::Unknown => "Unknown",
        }
    }

    /// Whether this status is terminal (the execution has closed).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkflowStatus::Running | WorkflowStatus::Unknown)
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified workflow execution record
///
/// Both list items and the single-execution describe projection normalize to
/// this shape; backend wire types never reach the renderer. `close_time` is
/// present only for executions that reached a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInfo {
    pub workflow_id: String,
    pub run_id: String,
    pub workflow_type: String,
    pub status: WorkflowStatus,
    pub start_time: DateTime<Utc>,
    pub close_time: Option<DateTime<Utc>>,
}

/// Query-related errors surfaced by the facade
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Backend I/O failure on a list query
    #[error("Failed to list {intent} workflows: {source}")]
    ListFailed {
        namespace: String,
        intent: StatusIntent,
        #[source]
        source: anyhow::Error,
    },

    /// Backend I/O failure on a describe lookup
    #[error("Failed to describe workflow: {source}")]
    DescribeFailed {
        workflow_id: String,
        run_id: Option<String>,
        #[source]
        source: anyhow::Error,
    },

    /// The backend reported no execution for the given identifier
    #[error("No information available for the specified workflow")]
    NotFound { workflow_id: String },
}
