//! QuickRec CLI — Interactive screen recording configurator.
//!
//! Usage:
//!   quickrec           Launch the interactive recording flow
//!   quickrec check     Check system capabilities

use clap::{Parser, Subcommand};

mod chooser;
mod commands;
mod executor;

#[derive(Parser)]
#[command(
    name = "quickrec",
    about = "Interactive screen recording for Linux",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive recording flow (the default)
    Record,

    /// Check system capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    quickrec_common::logging::init_logging(&quickrec_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command.unwrap_or(Commands::Record) {
        Commands::Record => commands::record::run().await,
        Commands::Check => commands::check::run(),
    }
}
