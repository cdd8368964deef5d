//! Analysis command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct AnalysisArgs {
    /// Print on one line instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub fn execute(args: AnalysisArgs) -> Result<()> {
    let reply = shareview_core::analysis::chat_reply();
    let json = if args.compact {
        serde_json::to_string(&reply)?
    } else {
        serde_json::to_string_pretty(&reply)?
    };
    println!("{json}");
    Ok(())
}
