//! Analysis stage: scan the project, read its critical files, and have
//! the analyst role synthesize a technical summary.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::ai::{prompts, AiClient};
use crate::config::Config;
use crate::scan::{IgnoreSet, PathFilter, Scanner};

/// Natural-language technical summary produced by the analyst.
///
/// Opaque to the pipeline: it is created here and consumed verbatim as
/// context by the strategy stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalSummary(String);

impl TechnicalSummary {
    /// Wraps summary text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The summary text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechnicalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The analysis stage.
pub struct AnalysisStage {
    scanner: Scanner,
    max_critical_files: usize,
}

impl AnalysisStage {
    /// Builds the stage from configuration (ignore lists and read cap).
    pub fn new(config: &Config) -> Self {
        let ignore = IgnoreSet::new(config.ignore_dirs.clone(), config.ignore_files.clone());
        Self {
            scanner: Scanner::new(PathFilter::new(ignore)),
            max_critical_files: config.max_critical_files,
        }
    }

    /// Scans `project_path`, reads the highest-ranked files, and asks the
    /// analyst role for a summary.
    ///
    /// A scan failure or AI failure aborts the stage. A single unreadable
    /// file does not: it is skipped with a warning and the summary is
    /// built from the remaining content.
    pub async fn run(
        &self,
        client: &dyn AiClient,
        project_path: &Path,
    ) -> Result<TechnicalSummary> {
        let outcome = self
            .scanner
            .scan(project_path)
            .context("project scan failed")?;

        let files = outcome.files().to_vec();
        let critical = select_critical_files(&files, self.max_critical_files);
        debug!(
            total = files.len(),
            critical = critical.len(),
            "Selected critical files"
        );

        let mut contents = Vec::with_capacity(critical.len());
        for path in critical {
            match std::fs::read_to_string(&path) {
                Ok(text) => contents.push((path, text)),
                Err(e) => {
                    // Local recovery: the summary tolerates partial input.
                    warn!(file = %path.display(), "Skipping unreadable file: {e}");
                }
            }
        }

        let system = prompts::system_prompt(&prompts::ANALYST);
        let user =
            prompts::analysis_user_prompt(&prompts::ANALYSIS_TASK, project_path, &files, &contents);

        let text = client
            .send_request(&system, &user)
            .await
            .context("analyst request failed")?;

        Ok(TechnicalSummary(text))
    }
}

/// Ranks scanned files by how informative they are for a first read and
/// returns the top `limit` in rank order (walk order breaks ties).
///
/// README-like documents rank highest, then dependency manifests, then
/// entry-point sources. Everything else is left for the file listing only.
pub fn select_critical_files(files: &[PathBuf], limit: usize) -> Vec<PathBuf> {
    let mut ranked: Vec<(u32, usize, &PathBuf)> = files
        .iter()
        .enumerate()
        .filter_map(|(index, path)| critical_rank(path).map(|rank| (rank, index, path)))
        .collect();

    ranked.sort_by_key(|&(rank, index, _)| (std::cmp::Reverse(rank), index));
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, _, path)| path.clone())
        .collect()
}

/// Rank for one file, or `None` if it is not worth reading in full.
fn critical_rank(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let lower = name.to_lowercase();

    if lower.starts_with("readme") {
        return Some(300);
    }

    const MANIFESTS: &[&str] = &[
        "Cargo.toml",
        "package.json",
        "pyproject.toml",
        "requirements.txt",
        "setup.py",
        "go.mod",
        "pom.xml",
        "build.gradle",
        "Gemfile",
        "composer.json",
    ];
    if MANIFESTS.contains(&name) {
        return Some(200);
    }

    const ENTRY_POINTS: &[&str] = &[
        "main.rs", "lib.rs", "main.py", "app.py", "main.go", "index.js", "index.ts", "app.js",
        "server.js",
    ];
    if ENTRY_POINTS.contains(&name) {
        return Some(100);
    }

    None
}
