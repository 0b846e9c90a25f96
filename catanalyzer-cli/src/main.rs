//! Catanalyzer CLI - Command-line interface
//!
//! Commands:
//! - analyze: Rank settlement spots on a board file
//! - random: Write a randomized standard board
//! - serve: Start the board editor API server

mod analyze_cmd;
mod random_cmd;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catanalyzer")]
#[command(about = "Catanalyzer settlement spot optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the best settlement spots on a board
    Analyze(analyze_cmd::AnalyzeArgs),
    /// Generate a randomized standard board
    Random(random_cmd::RandomArgs),
    /// Start the board editor API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "catanalyzer=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => analyze_cmd::run(args),
        Commands::Random(args) => random_cmd::run(args),
        Commands::Serve(args) => server::run(args),
    }
}
