//! Strategy stage: turn the technical summary into a business use-case
//! report and persist it.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ai::{prompts, AiClient};
use crate::pipeline::analysis::TechnicalSummary;

/// The strategist's report text.
///
/// Opaque, LLM-generated prose; the pipeline does not validate its
/// structure beyond passing it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessReport(String);

impl BusinessReport {
    /// Wraps report text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The report text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asks the strategist role for a use-case report, with the analyst's
/// summary as the only context.
pub async fn run(client: &dyn AiClient, summary: &TechnicalSummary) -> Result<BusinessReport> {
    let system = prompts::system_prompt(&prompts::STRATEGIST);
    let user = prompts::strategy_user_prompt(&prompts::STRATEGY_TASK, summary.as_str());

    let text = client
        .send_request(&system, &user)
        .await
        .context("strategist request failed")?;

    Ok(BusinessReport(text))
}

/// Writes the report to `path`, replacing any prior contents.
pub fn persist_report(report: &BusinessReport, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, report.as_str())
}
