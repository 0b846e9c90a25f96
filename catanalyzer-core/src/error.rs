//! Board editing errors

use crate::hex::Hex;

/// Errors raised when a board edit or import breaks a board invariant.
///
/// Analysis itself never fails; these only surface at the editing boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board radius {radius} is outside 0-{max}")]
    InvalidRadius { radius: i32, max: i32 },

    #[error("hex {hex} is not on a radius-{radius} board")]
    OffBoard { hex: Hex, radius: i32 },

    #[error("duplicate tile at {0}")]
    DuplicateTile(Hex),

    #[error("board has no tile at {0}")]
    MissingTile(Hex),

    #[error("invalid number token {0}: must be 1-12 and not 7")]
    InvalidNumber(u8),

    #[error("desert tile at {0} cannot carry a number")]
    NumberOnDesert(Hex),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("layout needs {pool} tiles but the board has {tiles}")]
    LayoutMismatch { tiles: usize, pool: usize },
}
