//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use studyplan_core::{params as core, ConfirmResult, Orchestrator, Tasks};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Adds the JSON deserialization and schema generation the MCP protocol
/// needs while the core parameter types stay interface-agnostic.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type AskQuestion = McpParams<core::AskQuestion>;
pub type SessionRef = McpParams<core::SessionRef>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    orchestrator: Arc<Orchestrator>,
}

impl McpHandlers {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let plan = self
            .orchestrator
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(plan.to_string())]))
    }

    pub async fn ask(&self, Parameters(params): Parameters<AskQuestion>) -> McpResult {
        debug!("ask: {:?}", params);

        let answer = self
            .orchestrator
            .answer_open_domain(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to answer question", &e))?;

        Ok(CallToolResult::success(vec![Content::text(answer.answer)]))
    }

    pub async fn get_todos(&self, Parameters(params): Parameters<SessionRef>) -> McpResult {
        debug!("get_todos: {:?}", params);

        let tasks = self
            .orchestrator
            .session_tasks(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to get todos", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            Tasks(&tasks).to_string(),
        )]))
    }

    pub async fn confirm_plan(&self, Parameters(params): Parameters<SessionRef>) -> McpResult {
        debug!("confirm_plan: {:?}", params);

        let session = self
            .orchestrator
            .confirm_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to confirm plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            ConfirmResult(session).to_string(),
        )]))
    }
}
