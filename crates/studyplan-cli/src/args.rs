use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use studyplan_core::{
    generation::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT},
    params::{AskQuestion, GeneratePlan},
};

/// Study plan generation service
///
/// Turns requests such as "5일 동안 파이썬 공부 계획 짜줘" into a prose plan
/// and a structured day-by-day todo list using an Ollama-compatible
/// text-generation backend. Runs as an HTTP server (the default), as an MCP
/// stdio server for AI assistants, or as one-shot terminal commands.
#[derive(Parser)]
#[command(version, about, name = "studyplan")]
pub struct Args {
    /// Base URL of the Ollama-compatible backend
    #[arg(long, global = true, env = "STUDYPLAN_BACKEND_URL", default_value = DEFAULT_BASE_URL)]
    pub backend_url: String,

    /// Model used for every generation call
    #[arg(long, global = true, env = "STUDYPLAN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Upper bound in seconds on a single generation call
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Maximum number of tokens generated per call
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `serve`: HTTP server for web and mobile clients (default)
/// - `mcp`: MCP server on stdio for AI assistant integration
/// - `plan` / `ask`: one-shot requests printed to the terminal
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    #[command(alias = "s")]
    Serve(ServeArgs),
    /// Start the MCP server on stdio
    Mcp,
    /// Generate a study plan and print it
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Ask a general question
    #[command(alias = "a")]
    Ask(AskArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,

    /// Maximum request body size in megabytes, bounding file uploads
    #[arg(long, default_value_t = 50)]
    pub max_upload_mb: usize,
}

impl ServeArgs {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_upload_mb: 50,
        }
    }
}

/// Generate a study plan
///
/// The number of days is read from the request ("5일", "3 days"); seven days
/// are planned when none is given. An optional slide deck grounds the plan
/// in its content.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// What to plan, e.g. "3일 동안 러스트 기초"
    pub message: String,
    /// Slide deck (.pptx) to use as reference material
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl From<&PlanArgs> for GeneratePlan {
    fn from(val: &PlanArgs) -> Self {
        GeneratePlan::new(val.message.as_str())
    }
}

/// Ask a general question
#[derive(clap::Args)]
pub struct AskArgs {
    /// The question
    pub message: String,
}

impl From<AskArgs> for AskQuestion {
    fn from(val: AskArgs) -> Self {
        AskQuestion {
            message: val.message,
        }
    }
}
