//! Expected-production scoring for settlement spots

use crate::board::{Resource, Tile};
use rustc_hash::FxHashSet;

/// Bonus per distinct resource type at a spot
pub const DIVERSITY_BONUS: f64 = 0.1;

/// Number of two-dice outcomes; scores are expressed in pips
const DICE_OUTCOMES: f64 = 36.0;

/// Extra display scaling on top of the pip conversion
const DISPLAY_SCALE: f64 = 4.0;

/// Probability of rolling `number` with two six-sided dice.
/// Seven and anything outside 2-12 yield zero.
pub fn roll_probability(number: u8) -> f64 {
    match number {
        2 | 12 => 1.0 / 36.0,
        3 | 11 => 2.0 / 36.0,
        4 | 10 => 3.0 / 36.0,
        5 | 9 => 4.0 / 36.0,
        6 | 8 => 5.0 / 36.0,
        _ => 0.0,
    }
}

/// Relative value of one unit of each resource
pub fn resource_weight(resource: Resource) -> f64 {
    match resource {
        Resource::Wheat => 1.0,
        Resource::Ore => 1.0,
        Resource::Wood => 0.9,
        Resource::Sheep => 0.8,
        Resource::Brick => 0.75,
        Resource::Desert | Resource::None => 0.0,
    }
}

/// Weighted production of one tile
pub fn tile_yield(tile: &Tile) -> f64 {
    tile.number.map(roll_probability).unwrap_or(0.0) * resource_weight(tile.resource)
}

/// Number of distinct resources among the tiles
pub fn diversity(tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .map(|t| t.resource)
        .collect::<FxHashSet<_>>()
        .len()
}

/// Score a three-tile spot.
///
/// `(sum of probability * weight + 0.1 * distinct resources) * 144`
///
/// Yields are accumulated in the order given (discovery order for a spot).
/// Permutations of the same tiles can differ in the last bit, and ranking
/// compares those bits exactly.
pub fn score_tiles(tiles: &[Tile; 3]) -> f64 {
    let pip_score = tiles.iter().fold(0.0, |acc, t| acc + tile_yield(t));
    let diversity_bonus = diversity(tiles) as f64 * DIVERSITY_BONUS;

    (pip_score + diversity_bonus) * DICE_OUTCOMES * DISPLAY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Hex;

    fn tile(q: i32, r: i32, resource: Resource, number: u8) -> Tile {
        Tile::new(Hex::new(q, r), resource, Some(number))
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_probability_table() {
        let total: f64 = (2..=12).map(roll_probability).sum();
        // Everything but the seven (6/36)
        assert!(approx_eq(total, 30.0 / 36.0));
        assert_eq!(roll_probability(7), 0.0);
        assert_eq!(roll_probability(1), 0.0);
        assert_eq!(roll_probability(6), roll_probability(8));
    }

    #[test]
    fn test_uniform_wheat_six() {
        let tiles = [
            tile(0, 0, Resource::Wheat, 6),
            tile(1, 0, Resource::Wheat, 6),
            tile(0, 1, Resource::Wheat, 6),
        ];
        let expected = (3.0 * 5.0 / 36.0 * 1.0 + 0.1) * 144.0;
        assert!(approx_eq(score_tiles(&tiles), expected));
        assert!((score_tiles(&tiles) - 74.4).abs() < 0.001);
        assert_eq!(diversity(&tiles), 1);
    }

    #[test]
    fn test_mixed_spot() {
        let tiles = [
            tile(0, 0, Resource::Wheat, 6),
            tile(1, 0, Resource::Ore, 8),
            tile(0, 1, Resource::Wood, 5),
        ];
        let expected = ((5.0 / 36.0) + (5.0 / 36.0) + (4.0 / 36.0 * 0.9) + 0.3) * 144.0;
        assert!(approx_eq(score_tiles(&tiles), expected));
        assert_eq!(diversity(&tiles), 3);
    }

    #[test]
    fn test_tile_order_only_moves_rounding() {
        let a = tile(0, 0, Resource::Brick, 11);
        let b = tile(1, -1, Resource::Sheep, 9);
        let c = tile(1, 0, Resource::Wood, 3);
        let base = score_tiles(&[a, b, c]);
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            assert!((score_tiles(&perm) - base).abs() < 1e-12);
        }
    }

    #[test]
    fn test_yields_summed_in_given_order() {
        let wood = tile(-1, 1, Resource::Wood, 4);
        let ore = tile(0, 1, Resource::Ore, 2);
        let brick = tile(0, 0, Resource::Brick, 4);
        // Discovery order rounds to exactly 67.0; coordinate order does not
        assert_eq!(score_tiles(&[wood, ore, brick]), 67.0);
        assert_eq!(score_tiles(&[wood, brick, ore]), 67.00000000000001);
    }

    #[test]
    fn test_unmapped_number_scores_zero_yield() {
        let one = tile(0, 0, Resource::Wheat, 1);
        assert_eq!(tile_yield(&one), 0.0);
    }
}
