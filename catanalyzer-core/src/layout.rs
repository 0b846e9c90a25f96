//! Standard board layouts
//!
//! The base-game pools: 19 terrain tiles and 18 number tokens.

use crate::board::{Board, Resource};
use crate::error::BoardError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Terrain pool of the standard 19-tile board
pub const RESOURCE_POOL: [(Resource, usize); 6] = [
    (Resource::Wood, 4),
    (Resource::Sheep, 4),
    (Resource::Wheat, 4),
    (Resource::Brick, 3),
    (Resource::Ore, 3),
    (Resource::Desert, 1),
];

/// Number tokens of the standard board (no 7)
pub const NUMBER_POOL: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

fn resource_pool() -> Vec<Resource> {
    RESOURCE_POOL
        .iter()
        .flat_map(|&(resource, count)| std::iter::repeat(resource).take(count))
        .collect()
}

/// Shuffle the standard pools onto the board.
///
/// Tiles take resources in board order; each non-desert tile then takes
/// the next shuffled token. Only fits a board with exactly 19 tiles.
pub fn randomize<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    let mut resources = resource_pool();
    if board.len() != resources.len() {
        return Err(BoardError::LayoutMismatch {
            tiles: board.len(),
            pool: resources.len(),
        });
    }

    let mut numbers = NUMBER_POOL.to_vec();
    resources.shuffle(rng);
    numbers.shuffle(rng);

    let hexes: Vec<_> = board.tiles().iter().map(|t| t.hex()).collect();
    let mut tokens = numbers.into_iter();

    for (hex, resource) in hexes.into_iter().zip(resources) {
        board.set_number(hex, None)?;
        board.set_resource(hex, resource)?;
        if resource != Resource::Desert {
            board.set_number(hex, tokens.next())?;
        }
    }

    tracing::debug!("randomized standard layout");
    Ok(())
}

/// Randomized standard board, reproducible from `seed`
pub fn random_board(seed: u64) -> Result<Board, BoardError> {
    let mut board = Board::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    randomize(&mut board, &mut rng)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_pools_match_board() {
        assert_eq!(resource_pool().len(), 19);
        let deserts = resource_pool().iter().filter(|r| **r == Resource::Desert).count();
        assert_eq!(NUMBER_POOL.len(), 19 - deserts);
        assert!(!NUMBER_POOL.contains(&7));
    }

    #[test]
    fn test_random_board_is_filled() {
        let board = random_board(42).unwrap();
        assert!(board.is_filled());
        assert!(board.validate().is_ok());

        let mut counts: FxHashMap<Resource, usize> = FxHashMap::default();
        for tile in board.tiles() {
            *counts.entry(tile.resource).or_default() += 1;
        }
        for (resource, count) in RESOURCE_POOL {
            assert_eq!(counts.get(&resource).copied(), Some(count));
        }

        let mut numbers: Vec<u8> = board.tiles().iter().filter_map(|t| t.number).collect();
        numbers.sort();
        assert_eq!(numbers, NUMBER_POOL.to_vec());
    }

    #[test]
    fn test_seed_reproducible() {
        assert_eq!(random_board(7).unwrap(), random_board(7).unwrap());
        assert_ne!(random_board(7).unwrap(), random_board(8).unwrap());
    }

    #[test]
    fn test_wrong_board_size() {
        let mut board = Board::new(3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            randomize(&mut board, &mut rng),
            Err(BoardError::LayoutMismatch { tiles: 37, pool: 19 })
        );
    }
}
