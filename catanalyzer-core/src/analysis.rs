//! Full analysis pipeline: enumerate, score, orient, rank

use crate::board::Board;
use crate::hex::Hex;
use crate::orient::orient;
use crate::rank::{rank_spots, RankedSpot, ScoredSpot};
use crate::score::{diversity, score_tiles};
use crate::spots::{enumerate_spots, Spot};
use serde::{Deserialize, Serialize};

/// Number of results kept by default
pub const DEFAULT_TOP_K: usize = 10;

/// Analysis settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many ranked spots to return
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AnalysisConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Result of one analysis run over a board snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Distinct spots on the board before truncation
    pub spots_found: usize,
    /// Best spots, rank 1 first
    pub results: Vec<RankedSpot>,
}

impl Analysis {
    /// The rank-1 spot, selected by default
    pub fn best(&self) -> Option<&RankedSpot> {
        self.results.first()
    }

    pub fn by_rank(&self, rank: usize) -> Option<&RankedSpot> {
        self.results.iter().find(|r| r.rank == rank)
    }

    /// Ranked spots that include `hex`
    pub fn touching(&self, hex: Hex) -> impl Iterator<Item = &RankedSpot> {
        self.results.iter().filter(move |r| r.contains(hex))
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Score and orient one spot
pub fn score_spot(spot: Spot) -> ScoredSpot {
    ScoredSpot {
        score: score_tiles(&spot.tiles),
        diversity: diversity(&spot.tiles),
        orientation: orient(&spot.tiles),
        spot,
    }
}

/// Analyze with the default top 10
pub fn analyze(board: &Board) -> Analysis {
    analyze_with(board, &AnalysisConfig::default())
}

/// Analyze a board snapshot.
///
/// Never fails: tiles without a resource or number simply take no part,
/// and a board with no junctions yields an empty result.
pub fn analyze_with(board: &Board, config: &AnalysisConfig) -> Analysis {
    let spots = enumerate_spots(board);
    let spots_found = spots.len();
    let scored: Vec<ScoredSpot> = spots.into_iter().map(score_spot).collect();
    let results = rank_spots(scored, config.top_k);

    tracing::debug!(
        spots_found,
        returned = results.len(),
        best = results.first().map(|r| r.score),
        "board analyzed"
    );

    Analysis {
        spots_found,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use crate::board::Tile;

    fn uniform_board(resource: Resource, number: u8) -> Board {
        let mut board = Board::default();
        let hexes: Vec<Hex> = board.tiles().iter().map(Tile::hex).collect();
        for hex in hexes {
            board.set_resource(hex, resource).unwrap();
            board.set_number(hex, Some(number)).unwrap();
        }
        board
    }

    #[test]
    fn test_uniform_board_scores_equal() {
        let analysis = analyze(&uniform_board(Resource::Wheat, 6));
        assert_eq!(analysis.spots_found, 24);
        assert_eq!(analysis.results.len(), 10);
        for r in &analysis.results {
            assert!((r.score - 74.4).abs() < 0.001);
            assert_eq!(r.diversity, 1);
        }
        assert_eq!(analysis.best().unwrap().rank, 1);
    }

    #[test]
    fn test_top_k_config() {
        let board = uniform_board(Resource::Ore, 8);
        let analysis = analyze_with(&board, &AnalysisConfig::default().with_top_k(3));
        assert_eq!(analysis.results.len(), 3);
        assert_eq!(analysis.spots_found, 24);

        let all = analyze_with(&board, &AnalysisConfig::default().with_top_k(100));
        assert_eq!(all.results.len(), 24);
    }

    #[test]
    fn test_empty_board_is_not_an_error() {
        let analysis = analyze(&Board::default());
        assert!(analysis.is_empty());
        assert!(analysis.best().is_none());
        assert_eq!(analysis.spots_found, 0);
    }

    #[test]
    fn test_touching_and_by_rank() {
        let analysis = analyze(&uniform_board(Resource::Sheep, 9));
        let best = analysis.by_rank(1).unwrap();
        let hex = best.hexes[0];
        assert!(analysis.touching(hex).any(|r| r.rank == 1));
        assert!(analysis.by_rank(11).is_none());
    }

    #[test]
    fn test_last_bit_score_differences_decide_order() {
        let layout = [
            (Hex::new(-1, 0), Resource::Wheat, 12),
            (Hex::new(-1, 1), Resource::Wood, 4),
            (Hex::new(0, -1), Resource::Ore, 5),
            (Hex::new(0, 0), Resource::Brick, 4),
            (Hex::new(0, 1), Resource::Ore, 2),
            (Hex::new(1, -1), Resource::Brick, 2),
            (Hex::new(1, 0), Resource::Brick, 11),
        ];
        let tiles = layout
            .iter()
            .map(|&(hex, resource, number)| Tile::new(hex, resource, Some(number)))
            .collect();
        let board = Board::from_tiles(1, tiles).unwrap();

        let analysis = analyze(&board);
        let keys: Vec<&str> = analysis.results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "-1,0|0,-1|0,0",
                "-1,0|-1,1|0,0",
                "-1,1|0,0|0,1",
                "0,-1|0,0|1,-1",
                "0,0|0,1|1,0",
                "0,0|1,-1|1,0",
            ]
        );
        // Ranks 2 and 3 tie exactly and keep discovery order
        assert_eq!(analysis.results[1].score.to_bits(), analysis.results[2].score.to_bits());
        assert_eq!(analysis.results[1].score, 67.0);
    }
}
