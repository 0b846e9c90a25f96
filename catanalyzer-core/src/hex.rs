//! Hex geometry with axial coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axial hex coordinates. The cube coordinate `s` is derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube coordinate
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Check if this hex lies on a board of the given radius.
    ///
    /// Computed in i64 so arbitrary imported coordinates cannot overflow.
    pub fn is_within(&self, radius: i32) -> bool {
        let (q, r) = (i64::from(self.q), i64::from(self.r));
        let radius = i64::from(radius);
        q.abs() <= radius && r.abs() <= radius && (q + r).abs() <= radius
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Hex {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Hex::new(self.q + dq, self.r + dr)
    }

    /// All six neighbors, in `DIRECTIONS` order
    pub fn neighbors(&self) -> [Hex; 6] {
        DIRECTIONS.map(|(dq, dr)| Hex::new(self.q + dq, self.r + dr))
    }

    /// True if `other` is exactly one unit direction away.
    ///
    /// The direction set is closed under negation, so the relation is
    /// symmetric without checking both ways explicitly.
    pub fn is_adjacent(&self, other: Hex) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dq, dr)| self.q + dq == other.q && self.r + dr == other.r)
    }

    /// All hexes of a radius-`radius` board, q-major then r.
    /// A negative radius yields nothing.
    pub fn all_within(radius: i32) -> impl Iterator<Item = Hex> {
        let span = if radius < 0 { 1..=0 } else { -radius..=radius };
        let rows = span.clone();
        span.flat_map(move |q| rows.clone().map(move |r| Hex::new(q, r)))
            .filter(move |hex| hex.is_within(radius))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// Unit direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // SE
];

/// Number of hexes on a board of the given radius
pub fn hex_count(radius: i32) -> usize {
    let r = radius.max(0) as usize;
    3 * r * (r + 1) + 1
}
