//! Settlement spot discovery
//!
//! A settlement spot is a vertex where three production tiles meet. Three
//! mutually adjacent hexes always share exactly one vertex, so spots are
//! found by pivoting on each production tile and testing every pair of its
//! production neighbors for adjacency.
//!
//! The same vertex is reached once from each of its three tiles, so raw
//! candidates are collapsed through a canonical key.

use crate::board::{Board, Tile};
use crate::hex::Hex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Separator between coordinates in a spot key
pub const KEY_SEPARATOR: &str = "|";

/// Approximate vertex position: the mean of the three tile coordinates.
/// Only used as a label, not a pixel projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub q: f64,
    pub r: f64,
}

/// A deduplicated junction of three production tiles
#[derive(Clone, Debug, PartialEq)]
pub struct Spot {
    /// Canonical key, identical for every discovery path
    pub key: String,
    /// Tiles in discovery order: pivot, then the two neighbors
    pub tiles: [Tile; 3],
    pub vertex: Vertex,
}

impl Spot {
    fn from_tiles(tiles: [Tile; 3]) -> Self {
        let hexes = tiles.map(|t| t.hex());
        let vertex = Vertex {
            q: (tiles[0].q + tiles[1].q + tiles[2].q) as f64 / 3.0,
            r: (tiles[0].r + tiles[1].r + tiles[2].r) as f64 / 3.0,
        };
        Self {
            key: spot_key(&hexes),
            tiles,
            vertex,
        }
    }

    pub fn hexes(&self) -> [Hex; 3] {
        self.tiles.map(|t| t.hex())
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.iter().any(|t| t.hex() == hex)
    }
}

/// Canonical key: the three `"q,r"` strings sorted lexicographically and
/// joined with `|`. Any ordering of the same hexes yields the same key.
pub fn spot_key(hexes: &[Hex; 3]) -> String {
    let mut parts: Vec<String> = hexes.iter().map(Hex::to_string).collect();
    parts.sort();
    parts.join(KEY_SEPARATOR)
}

/// Every raw junction candidate, including repeats of the same vertex.
///
/// Pivots follow board storage order; each pivot's neighbors follow
/// `DIRECTIONS` order, and pairs are taken `(i, j)` with `i < j`.
pub fn find_candidates(board: &Board) -> Vec<[Tile; 3]> {
    let production: FxHashMap<Hex, &Tile> = board
        .production_tiles()
        .map(|t| (t.hex(), t))
        .collect();

    let mut candidates = Vec::new();

    for pivot in board.production_tiles() {
        let neighbors: Vec<&Tile> = pivot
            .hex()
            .neighbors()
            .iter()
            .filter_map(|h| production.get(h).copied())
            .collect();

        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                let (a, b) = (neighbors[i], neighbors[j]);
                if a.hex().is_adjacent(b.hex()) {
                    candidates.push([*pivot, *a, *b]);
                }
            }
        }
    }

    candidates
}

/// Keep the first candidate seen for each canonical key
pub fn deduplicate(candidates: Vec<[Tile; 3]>) -> Vec<Spot> {
    let mut seen = FxHashSet::default();
    let mut spots = Vec::new();

    for tiles in candidates {
        let spot = Spot::from_tiles(tiles);
        if seen.insert(spot.key.clone()) {
            spots.push(spot);
        }
    }

    spots
}

/// All distinct settlement spots on the board, in first-discovery order
pub fn enumerate_spots(board: &Board) -> Vec<Spot> {
    let candidates = find_candidates(board);
    let raw = candidates.len();
    let spots = deduplicate(candidates);

    tracing::debug!(
        production_tiles = board.production_tiles().count(),
        candidates = raw,
        spots = spots.len(),
        "enumerated settlement spots"
    );

    spots
}
