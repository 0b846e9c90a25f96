//! Analyze command - rank settlement spots on a saved board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), report_results()
//! - Level 3: format_report()
//! - Level 4: configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use catanalyzer_core::{analyze_with, Analysis, AnalysisConfig, Board, DEFAULT_TOP_K};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Number of spots to report
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run analyze command
///
/// 1. Load the board
/// 2. Analyze it
/// 3. Report the ranked spots
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let board = load_board(&args.board)?;
    let config = AnalysisConfig::default().with_top_k(args.top);
    let analysis = analyze_with(&board, &config);

    tracing::info!(
        "Found {} settlement spots, reporting top {}",
        analysis.spots_found,
        analysis.results.len()
    );

    report_results(&analysis, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load a board file, warning when tiles are still unassigned
fn load_board(path: &PathBuf) -> Result<Board> {
    let board = Board::load(path)
        .with_context(|| format!("Failed to load board: {}", path.display()))?;

    if !board.is_filled() {
        tracing::warn!(
            "Board is incomplete ({} tiles missing a resource or number); \
             those tiles are skipped",
            board.missing_count()
        );
    }

    Ok(board)
}

/// Print results as text or JSON
fn report_results(analysis: &Analysis, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    } else {
        print!("{}", format_report(analysis));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Text report: one line per ranked spot, tiles as top, left, right
fn format_report(analysis: &Analysis) -> String {
    if analysis.is_empty() {
        return "No settlement spots: no three adjacent production tiles.\n".to_string();
    }

    let mut out = String::from("Top Settlements\n");
    for spot in &analysis.results {
        out.push_str(&spot.to_string());
        out.push('\n');
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catanalyzer_core::{analyze, random_board};

    #[test]
    fn test_format_report_lines() {
        let analysis = analyze(&random_board(1).unwrap());
        let report = format_report(&analysis);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Top Settlements");
        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("#1"));
        assert!(lines[10].starts_with("#10"));
    }

    #[test]
    fn test_format_empty_report() {
        let analysis = analyze(&Board::default());
        assert!(format_report(&analysis).starts_with("No settlement spots"));
    }

    #[test]
    fn test_load_board_missing_file() {
        assert!(load_board(&PathBuf::from("/nonexistent/board.json")).is_err());
    }
}
