//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analysis;
pub mod serve;

/// Shareview - Market-share analysis API
#[derive(Parser)]
#[command(name = "shareview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Print the analysis reply served by /api/chat
    Analysis(analysis::AnalysisArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analysis(args) => analysis::execute(args),
        }
    }
}
