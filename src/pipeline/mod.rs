//! Two-stage report pipeline.
//!
//! The coordinator runs the analysis stage, then the strategy stage, in
//! that order only: the strategist never runs before the analyst's summary
//! exists, and a failure in either stage aborts the run with an error
//! naming the stage. There is no retry logic at any level.

pub mod analysis;
pub mod strategy;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::ai::AiClient;
use crate::config::Config;
pub use analysis::{AnalysisStage, TechnicalSummary};
pub use strategy::BusinessReport;

/// Which part of the pipeline failed, with the underlying cause.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The analysis stage failed (scan error or AI failure); the strategy
    /// stage was never invoked.
    #[error("analysis stage failed")]
    Analysis(#[source] anyhow::Error),

    /// The strategy stage failed; no report was generated.
    #[error("strategy stage failed")]
    Strategy(#[source] anyhow::Error),

    /// The report was generated but could not be written to disk.
    ///
    /// The generated text rides along so callers can still present it.
    #[error("report generated but could not be written to {}", .path.display())]
    Persistence {
        /// Output path the write targeted.
        path: PathBuf,
        /// The generated report, preserved in memory.
        report: BusinessReport,
        /// Underlying write failure.
        source: std::io::Error,
    },
}

/// Successful pipeline result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// The analyst's technical summary.
    pub summary: TechnicalSummary,
    /// The strategist's report, as persisted.
    pub report: BusinessReport,
    /// Where the report was written.
    pub report_path: PathBuf,
}

/// Sequences the analysis and strategy stages over one AI client.
pub struct Pipeline<C: AiClient> {
    client: C,
    analysis: AnalysisStage,
    output_path: PathBuf,
}

impl<C: AiClient> Pipeline<C> {
    /// Creates a pipeline from configuration.
    ///
    /// `output_path` overrides the configured output file when given.
    pub fn new(client: C, config: &Config, output_path: Option<PathBuf>) -> Self {
        Self {
            client,
            analysis: AnalysisStage::new(config),
            output_path: output_path.unwrap_or_else(|| config.output_file.clone()),
        }
    }

    /// Runs both stages and persists the report.
    ///
    /// Either both stages succeed and the report is on disk, or the error
    /// identifies which step failed and why. A persistence failure still
    /// carries the generated report back to the caller.
    pub async fn run(&self, project_path: &Path) -> Result<PipelineOutcome, PipelineError> {
        info!(project = %project_path.display(), "Starting analysis stage");
        let summary = self
            .analysis
            .run(&self.client, project_path)
            .await
            .map_err(PipelineError::Analysis)?;

        info!("Starting strategy stage");
        let report = strategy::run(&self.client, &summary)
            .await
            .map_err(PipelineError::Strategy)?;

        if let Err(source) = strategy::persist_report(&report, &self.output_path) {
            return Err(PipelineError::Persistence {
                path: self.output_path.clone(),
                report,
                source,
            });
        }
        info!(path = %self.output_path.display(), "Report written");

        Ok(PipelineOutcome {
            summary,
            report,
            report_path: self.output_path.clone(),
        })
    }

    /// The path the report will be written to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
