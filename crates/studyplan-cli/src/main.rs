//! Studyplan CLI Application
//!
//! Serves the plan generation orchestrator over HTTP or MCP, or runs a single
//! request from the terminal.

mod args;
mod cli;
mod mcp;
mod renderer;
mod server;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands, ServeArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StudyplanMcpServer};
use renderer::TerminalRenderer;
use server::run_http_server;
use studyplan_core::OrchestratorBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        backend_url,
        model,
        timeout_secs,
        max_tokens,
        no_color,
        command,
    } = Args::parse();

    let orchestrator = OrchestratorBuilder::new()
        .with_base_url(backend_url)
        .with_model(model)
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_max_tokens(max_tokens)
        .build()
        .context("Failed to initialize orchestrator")?;

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Serve(serve)) => serve_http(orchestrator, serve).await,
        Some(Mcp) => {
            info!("Starting studyplan MCP server");
            run_stdio_server(StudyplanMcpServer::new(orchestrator))
                .await
                .context("MCP server failed")
        }
        Some(Plan(plan)) => Cli::new(orchestrator, renderer).plan(plan).await,
        Some(Ask(ask)) => Cli::new(orchestrator, renderer).ask(ask).await,
        None => serve_http(orchestrator, ServeArgs::default()).await,
    }
}

async fn serve_http(orchestrator: studyplan_core::Orchestrator, serve: ServeArgs) -> Result<()> {
    info!("Starting studyplan HTTP server");
    run_http_server(orchestrator, serve.listen, serve.max_upload_bytes())
        .await
        .context("HTTP server failed")
}
