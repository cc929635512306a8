//! One-shot terminal commands

use anyhow::{Context, Result};
use log::debug;
use studyplan_core::{params::GeneratePlan, Orchestrator};
use tokio::fs;

use crate::{
    args::{AskArgs, PlanArgs},
    renderer::TerminalRenderer,
};

/// Runs a single request against the orchestrator and prints the result
pub struct Cli {
    orchestrator: Orchestrator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(orchestrator: Orchestrator, renderer: TerminalRenderer) -> Self {
        Self {
            orchestrator,
            renderer,
        }
    }

    /// Generate a plan, grounded in a slide deck when one is given.
    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let plan = match &args.file {
            Some(path) => {
                let document = fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                debug!("Read {} bytes from {}", document.len(), path.display());
                self.orchestrator
                    .generate_plan_with_document(&args.message, document)
                    .await
            }
            None => {
                self.orchestrator
                    .generate_plan(&GeneratePlan::from(&args))
                    .await
            }
        }
        .context("Failed to generate plan")?;

        self.renderer.render(&plan.to_string())
    }

    /// Answer a general question.
    pub async fn ask(&self, args: AskArgs) -> Result<()> {
        let answer = self
            .orchestrator
            .answer_open_domain(&args.into())
            .await
            .context("Failed to answer question")?;

        self.renderer.render(&answer.to_string())
    }
}
