//! MCP server implementation
//!
//! Exposes plan generation, open-domain questions and session handling as
//! Model Context Protocol tools over stdio. Tool results are the same
//! markdown the terminal front-end prints.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use studyplan_core::Orchestrator;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AskQuestion, GeneratePlan, McpResult, SessionRef};

/// MCP server for study plan generation
#[derive(Clone)]
pub struct StudyplanMcpServer {
    orchestrator: Arc<Orchestrator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StudyplanMcpServer {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.orchestrator.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a day-by-day study plan from a free-form request such as '5일 동안 파이썬 공부 계획 짜줘' or 'a 3 days plan for Rust'. The number of days is read from the message (7 when absent, at most 30). Optional supplementary_text grounds the plan in reference material. Returns the narrative plan, the structured todos per day and a session_id for get_todos and confirm_plan."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "ask",
        description = "Answer a general question conversationally. Never produces a plan or todo list and creates no session."
    )]
    async fn ask(&self, params: Parameters<AskQuestion>) -> McpResult {
        self.handlers().ask(params).await
    }

    #[tool(
        name = "get_todos",
        description = "Show the structured todos stored for a plan session. Fails if the session is unknown or was already confirmed."
    )]
    async fn get_todos(&self, params: Parameters<SessionRef>) -> McpResult {
        self.handlers().get_todos(params).await
    }

    #[tool(
        name = "confirm_plan",
        description = "Confirm a generated plan once its todos have been saved. Discards the session; later get_todos or confirm_plan calls for it fail."
    )]
    async fn confirm_plan(&self, params: Parameters<SessionRef>) -> McpResult {
        self.handlers().confirm_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StudyplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "studyplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Studyplan turns study requests into a narrative plan plus structured daily todos.

## Workflow
1. Call `generate_plan` with the user's request. Mention the number of days in the message ("5일", "3 days"); seven days are planned otherwise.
2. Present the narrative and use `get_todos` with the returned session_id to fetch the todo list again when needed.
3. Once the todos have been saved elsewhere, call `confirm_plan` to discard the session.

Use `ask` for questions that are not plan requests. Sessions live only as long as the server process."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StudyplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting studyplan MCP server on stdio");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
