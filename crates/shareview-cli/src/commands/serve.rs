//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shareview_core::config::{ServerConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_PORT};
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SHAREVIEW_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SHAREVIEW_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Browser origin allowed to make credentialed cross-origin requests
    #[arg(long, env = "SHAREVIEW_ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "shareview.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port, self.allowed_origin.clone())
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    config.validate()?;
    tracing::debug!(?config, "Starting server");

    println!();
    println!("  {} {}", "Shareview".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}        http://{}:{}/api/chat",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}     http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "CORS origin".green(), args.allowed_origin);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    shareview_web::run_server(config).await?;

    Ok(())
}
