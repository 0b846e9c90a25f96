//! Catanalyzer Core - Settlement spot analysis
//!
//! This crate provides the analysis engine:
//! - Board geometry (hex grid with axial coordinates)
//! - Board model with resources and number tokens
//! - Settlement spot enumeration and deduplication
//! - Expected-production scoring with a diversity bonus
//! - Top/left/right orientation and top-K ranking

pub mod hex;
pub mod board;
pub mod error;
pub mod spots;
pub mod score;
pub mod orient;
pub mod rank;
pub mod analysis;
pub mod layout;

// Re-exports for convenient access
pub use hex::{Hex, DIRECTIONS};
pub use board::{is_valid_number, Board, Resource, Tile, DEFAULT_RADIUS, MAX_RADIUS};
pub use error::BoardError;
pub use spots::{enumerate_spots, spot_key, Spot, Vertex};
pub use score::{score_tiles, roll_probability, resource_weight};
pub use orient::{orient, Orientation};
pub use rank::{rank_spots, RankedSpot, ScoredSpot};
pub use analysis::{analyze, analyze_with, Analysis, AnalysisConfig, DEFAULT_TOP_K};
pub use layout::{randomize, random_board};
