//! CallToolResult helpers
//!
//! Thin wrappers over the rmcp result constructors. Internal failures become
//! caller-visible error results rather than protocol errors, so one bad
//! invocation never takes the server down.

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text response.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a caller-visible error response carrying a human-readable message.
pub fn text_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_text_error_is_flagged() {
        let result = text_error("something went wrong");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }
}
