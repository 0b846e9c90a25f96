//! Ranking and top-K selection

use crate::board::Tile;
use crate::hex::Hex;
use crate::orient::Orientation;
use crate::spots::{Spot, Vertex};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A spot with its score and display orientation, before ranking
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredSpot {
    pub spot: Spot,
    pub score: f64,
    pub diversity: usize,
    pub orientation: Orientation,
}

/// One entry of the final result list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedSpot {
    /// 1-based position in the result list
    pub rank: usize,
    pub score: f64,
    pub diversity: usize,
    pub key: String,
    pub vertex: Vertex,
    /// Tiles as [top, left, right]
    pub oriented: [Tile; 3],
    /// Underlying coordinates, for highlight matching
    pub hexes: [Hex; 3],
}

impl RankedSpot {
    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains(&hex)
    }
}

impl fmt::Display for RankedSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<3}{:>6.1} ", self.rank, self.score)?;
        for tile in &self.oriented {
            match tile.number {
                Some(n) => write!(f, "  {} {:>2}", tile.resource.emoji(), n)?,
                None => write!(f, "  {}   ", tile.resource.emoji())?,
            }
        }
        Ok(())
    }
}

/// Sort by score descending and keep the first `top_k`.
///
/// The sort is stable, so equal scores stay in discovery order.
pub fn rank_spots(mut scored: Vec<ScoredSpot>, top_k: usize) -> Vec<RankedSpot> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(top_k)
        .enumerate()
        .map(|(i, s)| RankedSpot {
            rank: i + 1,
            score: s.score,
            diversity: s.diversity,
            hexes: s.spot.hexes(),
            key: s.spot.key,
            vertex: s.spot.vertex,
            oriented: s.orientation.as_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use crate::orient::orient;

    fn scored(q: i32, score: f64) -> ScoredSpot {
        let tiles = [
            Tile::new(Hex::new(q, 0), Resource::Wheat, Some(6)),
            Tile::new(Hex::new(q + 1, 0), Resource::Wheat, Some(6)),
            Tile::new(Hex::new(q, 1), Resource::Wheat, Some(6)),
        ];
        ScoredSpot {
            spot: Spot {
                key: format!("spot-{}", q),
                tiles,
                vertex: Vertex { q: q as f64, r: 0.0 },
            },
            score,
            diversity: 1,
            orientation: orient(&tiles),
        }
    }

    #[test]
    fn test_sorted_descending_with_dense_ranks() {
        let ranked = rank_spots(vec![scored(0, 10.0), scored(1, 30.0), scored(2, 20.0)], 10);
        let keys: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["spot-1", "spot-2", "spot-0"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let ranked = rank_spots(
            vec![scored(0, 5.0), scored(1, 9.0), scored(2, 5.0), scored(3, 5.0)],
            10,
        );
        let keys: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["spot-1", "spot-0", "spot-2", "spot-3"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let input: Vec<ScoredSpot> = (0..15).map(|i| scored(i, i as f64)).collect();
        let ranked = rank_spots(input, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].key, "spot-14");
        assert_eq!(ranked[9].rank, 10);

        assert!(rank_spots(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_display_line() {
        let ranked = rank_spots(vec![scored(0, 74.4)], 1);
        let line = ranked[0].to_string();
        assert!(line.starts_with("#1"));
        assert!(line.contains("74.4"));
        assert_eq!(line.matches("🌾").count(), 3);
    }
}
