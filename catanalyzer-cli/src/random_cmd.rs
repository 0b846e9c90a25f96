//! Random command - write a randomized standard board

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use catanalyzer_core::random_board;

#[derive(Args)]
pub struct RandomArgs {
    /// Output board JSON file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Random seed (omit for a fresh board each run)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run random command
pub fn run(args: RandomArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let board = random_board(seed)?;
    board.save(&args.output)?;

    tracing::info!("Wrote board (seed {}) to {}", seed, args.output.display());
    Ok(())
}
