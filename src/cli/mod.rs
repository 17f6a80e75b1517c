//! CLI interface for bizcase.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate;
pub mod scan;

/// bizcase: business use-case reports for code projects
#[derive(Parser)]
#[command(name = "bizcase")]
#[command(about = "Generate business use-case reports for code projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a project and generate a business use-case report
    Generate(generate::GenerateCommand),
    /// List the project files that survive the noise filter
    Scan(scan::ScanCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute().await,
            Commands::Scan(cmd) => cmd.execute(),
        }
    }
}
