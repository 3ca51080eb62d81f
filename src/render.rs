//! Text rendering of workflow executions
//!
//! Output here is a compatibility surface: clients parse these lines, so
//! field order, presence rules, and the timestamp format must stay stable.
//! Timestamps are RFC 3339 in UTC with seconds precision.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::ExecutionInfo;

fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a list of executions for the given status label.
///
/// Entries are emitted in input order; the `End:` column appears only for
/// executions with a close time.
pub fn render_list(label: &str, executions: &[ExecutionInfo]) -> String {
    if executions.is_empty() {
        return format!("No {} workflows found.\n", label);
    }

    let mut output = format!("Found {} {} workflow(s):\n", executions.len(), label);
    for info in executions {
        output.push_str(&format!(
            "- ID: {} | Run: {} | Type: {} | Status: {} | Start: {}",
            info.workflow_id,
            info.run_id,
            info.workflow_type,
            info.status,
            format_timestamp(&info.start_time),
        ));
        if let Some(close_time) = &info.close_time {
            output.push_str(&format!(" | End: {}", format_timestamp(close_time)));
        }
        output.push('\n');
    }
    output
}

/// Render the detail block for one execution.
///
/// The `End Time:` line is emitted only when the execution has closed.
pub fn render_detail(info: &ExecutionInfo) -> String {
    let mut output = String::from("Workflow Execution Details:\n");
    output.push_str(&format!("Workflow ID: {}\n", info.workflow_id));
    output.push_str(&format!("Run ID: {}\n", info.run_id));
    output.push_str(&format!("Type: {}\n", info.workflow_type));
    output.push_str(&format!("Status: {}\n", info.status));
    output.push_str(&format!("Start Time: {}\n", format_timestamp(&info.start_time)));
    if let Some(close_time) = &info.close_time {
        output.push_str(&format!("End Time: {}\n", format_timestamp(close_time)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkflowStatus;
    use chrono::TimeZone;

    fn execution(workflow_id: &str, run_id: &str, status: WorkflowStatus) -> ExecutionInfo {
        ExecutionInfo {
            workflow_id: workflow_id.to_string(),
            run_id: run_id.to_string(),
            workflow_type: "OrderWorkflow".to_string(),
            status,
            start_time: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            close_time: None,
        }
    }

    #[test]
    fn test_empty_list_exact_text() {
        assert_eq!(render_list("running", &[]), "No running workflows found.\n");
        assert_eq!(render_list("failed", &[]), "No failed workflows found.\n");
    }

    #[test]
    fn test_list_running_line_format() {
        let executions = vec![execution("order-42", "run-1", WorkflowStatus::Running)];
        let text = render_list("running", &executions);
        assert_eq!(
            text,
            "Found 1 running workflow(s):\n\
             - ID: order-42 | Run: run-1 | Type: OrderWorkflow | Status: Running | Start: 2024-03-01T10:00:00Z\n"
        );
    }

    #[test]
    fn test_list_closed_line_includes_end_column() {
        let mut info = execution("order-42", "run-1", WorkflowStatus::Completed);
        info.close_time = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 5, 30).unwrap());
        let text = render_list("completed", &[info]);
        assert_eq!(
            text,
            "Found 1 completed workflow(s):\n\
             - ID: order-42 | Run: run-1 | Type: OrderWorkflow | Status: Completed | Start: 2024-03-01T10:00:00Z | End: 2024-03-01T10:05:30Z\n"
        );
    }

    #[test]
    fn test_list_preserves_input_order() {
        let executions = vec![
            execution("b-workflow", "run-b", WorkflowStatus::Running),
            execution("a-workflow", "run-a", WorkflowStatus::Running),
        ];
        let text = render_list("running", &executions);
        let b = text.find("b-workflow").unwrap();
        let a = text.find("a-workflow").unwrap();
        assert!(b < a, "entries must keep backend order: {}", text);
    }

    #[test]
    fn test_detail_without_end_time() {
        let info = execution("order-42", "run-1", WorkflowStatus::Running);
        let text = render_detail(&info);
        assert_eq!(
            text,
            "Workflow Execution Details:\n\
             Workflow ID: order-42\n\
             Run ID: run-1\n\
             Type: OrderWorkflow\n\
             Status: Running\n\
             Start Time: 2024-03-01T10:00:00Z\n"
        );
        assert!(!text.contains("End Time:"));
    }

    #[test]
    fn test_detail_with_end_time() {
        let mut info = execution("order-42", "run-1", WorkflowStatus::Failed);
        info.close_time = Some(Utc.with_ymd_and_hms(2024, 3, 1, 11, 30, 0).unwrap());
        let text = render_detail(&info);
        assert!(text.ends_with("End Time: 2024-03-01T11:30:00Z\n"));
    }

    #[test]
    fn test_detail_end_time_presence_matches_close_time() {
        // Rendering then re-checking the End Time line must match the input
        for close_time in [None, Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap())] {
            let mut info = execution("w", "r", WorkflowStatus::Completed);
            info.close_time = close_time;
            let text = render_detail(&info);
            let has_line = text
                .lines()
                .any(|l| l.starts_with("End Time: ") && l.len() > "End Time: ".len());
            assert_eq!(has_line, close_time.is_some());
        }
    }
}
