//! The `scan` command: print the filtered file listing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::scan::{IgnoreSet, PathFilter, ScanOutcome, Scanner};

/// List the project files that survive the noise filter.
#[derive(Parser)]
pub struct ScanCommand {
    /// Path to the project directory to scan.
    pub project_path: PathBuf,

    /// Config file path (default: .bizcase.yaml in the project directory).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ScanCommand {
    /// Executes the scan command.
    pub fn execute(self) -> Result<()> {
        let config = Config::load(&self.project_path, self.config.as_deref())?;
        let ignore = IgnoreSet::new(config.ignore_dirs, config.ignore_files);
        let scanner = Scanner::new(PathFilter::new(ignore));

        match scanner.scan(&self.project_path)? {
            ScanOutcome::Files(files) => {
                println!("Found the following relevant files:");
                for file in files {
                    println!("{}", file.display());
                }
            }
            ScanOutcome::NoRelevantFiles => {
                println!("No relevant files found in the directory after filtering.");
            }
        }

        Ok(())
    }
}
