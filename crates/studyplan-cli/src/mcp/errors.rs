//! Error handling utilities for MCP server

use rmcp::ErrorData;
use studyplan_core::PlanError;

/// Convert orchestrator errors to MCP errors
///
/// Unknown sessions are the caller's mistake and surface as invalid
/// parameters; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlanError) -> ErrorData {
    match error {
        PlanError::SessionNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
