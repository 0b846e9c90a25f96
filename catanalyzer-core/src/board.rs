//! Board model: tiles, resources, and number tokens

use crate::error::BoardError;
use crate::hex::{hex_count, Hex};
use anyhow::Context;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Standard board radius (19 tiles)
pub const DEFAULT_RADIUS: i32 = 2;

/// Largest board radius accepted on import
pub const MAX_RADIUS: i32 = 32;

/// Smallest number token the editor accepts
pub const MIN_NUMBER: u8 = 1;

/// Largest number token (highest two-dice sum)
pub const MAX_NUMBER: u8 = 12;

/// The robber roll, never assignable to a tile
pub const ROBBER_ROLL: u8 = 7;

/// Check a number token against the editor's accepted range
pub fn is_valid_number(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number) && number != ROBBER_ROLL
}

// ============================================================================
// RESOURCE
// ============================================================================

/// Terrain on a tile. `None` means not yet assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Wheat,
    Ore,
    Sheep,
    Desert,
    #[default]
    None,
}

impl Resource {
    /// Resources selectable in the editor (everything except `None`)
    pub const ASSIGNABLE: [Resource; 6] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Wheat,
        Resource::Ore,
        Resource::Sheep,
        Resource::Desert,
    ];

    /// True for resources that produce on a dice roll
    pub fn is_productive(self) -> bool {
        !matches!(self, Resource::Desert | Resource::None)
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Wheat => "wheat",
            Resource::Ore => "ore",
            Resource::Sheep => "sheep",
            Resource::Desert => "desert",
            Resource::None => "none",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Resource::Wood => "🌲",
            Resource::Brick => "🧱",
            Resource::Wheat => "🌾",
            Resource::Ore => "⛰️",
            Resource::Sheep => "🐑",
            Resource::Desert => "🏜️",
            Resource::None => "",
        }
    }

    /// Display label, e.g. "🌾 Wheat"
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        if self == Resource::None {
            capitalized
        } else {
            format!("{} {}", self.emoji(), capitalized)
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wood" => Ok(Resource::Wood),
            "brick" => Ok(Resource::Brick),
            "wheat" => Ok(Resource::Wheat),
            "ore" => Ok(Resource::Ore),
            "sheep" => Ok(Resource::Sheep),
            "desert" => Ok(Resource::Desert),
            "none" => Ok(Resource::None),
            _ => Err(BoardError::UnknownResource(s.to_string())),
        }
    }
}

// ============================================================================
// TILE
// ============================================================================

/// One hex cell of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub q: i32,
    pub r: i32,
    #[serde(default)]
    pub resource: Resource,
    #[serde(default)]
    pub number: Option<u8>,
}

impl Tile {
    /// Unassigned tile at `hex`
    pub fn empty(hex: Hex) -> Self {
        Self {
            q: hex.q,
            r: hex.r,
            resource: Resource::None,
            number: None,
        }
    }

    pub fn new(hex: Hex, resource: Resource, number: Option<u8>) -> Self {
        Self {
            q: hex.q,
            r: hex.r,
            resource,
            number,
        }
    }

    pub fn hex(&self) -> Hex {
        Hex::new(self.q, self.r)
    }

    /// Production tiles are the only ones that can form a junction
    pub fn is_production(&self) -> bool {
        self.resource.is_productive() && self.number.is_some()
    }

    /// Tile satisfies the editor's completeness rule
    pub fn is_filled(&self) -> bool {
        self.resource != Resource::None
            && (self.resource == Resource::Desert || self.number.is_some())
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// A regular hexagon of tiles, stored in generation order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    radius: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Blank board: every tile unassigned
    pub fn new(radius: i32) -> Self {
        let tiles = Hex::all_within(radius).map(Tile::empty).collect();
        Self { radius, tiles }
    }

    /// Build a board from explicit tiles, checking every invariant
    pub fn from_tiles(radius: i32, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        let board = Self { radius, tiles };
        board.validate()?;
        Ok(board)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, hex: Hex) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.hex() == hex)
    }

    fn tile_mut(&mut self, hex: Hex) -> Result<&mut Tile, BoardError> {
        let radius = self.radius;
        if !hex.is_within(radius) {
            return Err(BoardError::OffBoard { hex, radius });
        }
        self.tiles
            .iter_mut()
            .find(|t| t.hex() == hex)
            .ok_or(BoardError::MissingTile(hex))
    }

    /// Tiles eligible for junctions, in storage order
    pub fn production_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_production())
    }

    /// Assign a resource. Turning a tile into desert drops its number.
    pub fn set_resource(&mut self, hex: Hex, resource: Resource) -> Result<(), BoardError> {
        let tile = self.tile_mut(hex)?;
        tile.resource = resource;
        if resource == Resource::Desert {
            tile.number = None;
        }
        Ok(())
    }

    /// Assign or clear a number token
    pub fn set_number(&mut self, hex: Hex, number: Option<u8>) -> Result<(), BoardError> {
        if let Some(n) = number {
            if !is_valid_number(n) {
                return Err(BoardError::InvalidNumber(n));
            }
        }
        let tile = self.tile_mut(hex)?;
        if number.is_some() && tile.resource == Resource::Desert {
            return Err(BoardError::NumberOnDesert(hex));
        }
        tile.number = number;
        Ok(())
    }

    /// Reset every tile to unassigned
    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.resource = Resource::None;
            tile.number = None;
        }
    }

    /// Every tile has a resource, and every non-desert tile a number
    pub fn is_filled(&self) -> bool {
        self.tiles.iter().all(Tile::is_filled)
    }

    /// Number of tiles still blocking analysis
    pub fn missing_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_filled()).count()
    }

    /// Check board shape and token rules
    pub fn validate(&self) -> Result<(), BoardError> {
        let radius = self.radius;
        if !(0..=MAX_RADIUS).contains(&radius) {
            return Err(BoardError::InvalidRadius {
                radius,
                max: MAX_RADIUS,
            });
        }
        let mut seen = FxHashSet::default();

        for tile in &self.tiles {
            let hex = tile.hex();
            if !hex.is_within(radius) {
                return Err(BoardError::OffBoard { hex, radius });
            }
            if !seen.insert(hex) {
                return Err(BoardError::DuplicateTile(hex));
            }
            if let Some(n) = tile.number {
                if !is_valid_number(n) {
                    return Err(BoardError::InvalidNumber(n));
                }
                if tile.resource == Resource::Desert {
                    return Err(BoardError::NumberOnDesert(hex));
                }
            }
        }

        if seen.len() != hex_count(radius) {
            if let Some(hex) = Hex::all_within(radius).find(|h| !seen.contains(h)) {
                return Err(BoardError::MissingTile(hex));
            }
        }

        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?;
        let board: Board = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board file {}", path.display()))?;
        board.validate()?;
        Ok(board)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write board file {}", path.display()))?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}
