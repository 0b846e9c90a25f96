//! Top/left/right ordering of a spot's tiles for display

use crate::board::Tile;
use serde::{Deserialize, Serialize};

/// A spot's tiles arranged around their shared vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    pub top: Tile,
    pub left: Tile,
    pub right: Tile,
}

impl Orientation {
    pub fn as_array(&self) -> [Tile; 3] {
        [self.top, self.left, self.right]
    }
}

/// Arrange three tiles as (top, left, right).
///
/// The apex is the tile farthest from the centroid in raw (q, r) space,
/// with ties going to the earliest tile in `tiles`. The other two form
/// the base, ordered by ascending q. An apex above the centroid (smaller
/// r) points up and takes the top slot; otherwise the base fills top and
/// left and the apex goes right.
pub fn orient(tiles: &[Tile; 3]) -> Orientation {
    let center_q = tiles.iter().map(|t| t.q).sum::<i32>() as f64 / 3.0;
    let center_r = tiles.iter().map(|t| t.r).sum::<i32>() as f64 / 3.0;

    let mut by_distance: Vec<(usize, f64)> = tiles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let dq = t.q as f64 - center_q;
            let dr = t.r as f64 - center_r;
            (i, (dq * dq + dr * dr).sqrt())
        })
        .collect();

    // Stable: equal distances keep input order
    by_distance.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let apex_index = by_distance[0].0;
    let apex = tiles[apex_index];

    let mut base: Vec<Tile> = tiles
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != apex_index)
        .map(|(_, t)| *t)
        .collect();
    base.sort_by_key(|t| t.q);

    if (apex.r as f64) < center_r {
        Orientation {
            top: apex,
            left: base[0],
            right: base[1],
        }
    } else {
        Orientation {
            top: base[0],
            left: base[1],
            right: apex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use crate::hex::Hex;

    fn t(q: i32, r: i32) -> Tile {
        Tile::new(Hex::new(q, r), Resource::Wheat, Some(6))
    }

    #[test]
    fn test_rounding_picks_apex() {
        // (0,0) and (1,-1) are equidistant on paper, but (1,-1) comes out
        // one ulp farther once the centroid (1/3, -2/3) is rounded.
        let o = orient(&[t(0, 0), t(1, -1), t(0, -1)]);
        assert_eq!(o.top, t(1, -1));
        assert_eq!(o.left, t(0, 0));
        assert_eq!(o.right, t(0, -1));
    }

    #[test]
    fn test_apex_tie_breaks_by_input_order() {
        // (1,0) and (0,1) are exactly equidistant from (1/3, 1/3)
        let first = orient(&[t(0, 0), t(1, 0), t(0, 1)]);
        assert_eq!(first.as_array(), [t(1, 0), t(0, 0), t(0, 1)]);

        // (0,1) wins the tie, lies below the centroid, and goes right
        let swapped = orient(&[t(0, 0), t(0, 1), t(1, 0)]);
        assert_eq!(swapped.as_array(), [t(0, 0), t(1, 0), t(0, 1)]);
    }

    #[test]
    fn test_apex_above_centroid_takes_top() {
        // Centroid (-1/3, -1/3); (0,-1) and (-1,0) tie, (0,-1) first
        let o = orient(&[t(0, -1), t(-1, 0), t(0, 0)]);
        assert_eq!(o.top, t(0, -1));
        assert_eq!(o.left, t(-1, 0));
        assert_eq!(o.right, t(0, 0));
    }

    #[test]
    fn test_orientation_is_a_permutation() {
        let tiles = [t(-2, 0), t(-1, 0), t(-1, -1)];
        let mut got: Vec<Hex> = orient(&tiles).as_array().iter().map(Tile::hex).collect();
        let mut want: Vec<Hex> = tiles.iter().map(Tile::hex).collect();
        got.sort();
        want.sort();
        assert_eq!(got, want);
    }
}
