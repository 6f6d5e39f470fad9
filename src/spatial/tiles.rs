//! Pipe tile kinds and their open directions
//!
//! Every kind has a canonical set of openings at rotation 0. A tile's rotation
//! counts clockwise quarter turns applied to that canonical set, so the open
//! directions of a tile are a pure function of `(kind, rotation)`.

use serde::{Deserialize, Serialize};

use crate::io::error::{PuzzleError, invalid_grid};
use crate::spatial::direction::{Direction, DirectionSet};

/// Number of distinct rotations a tile can take
pub const ROTATIONS: u8 = 4;

/// Shape of a pipe tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Single stub, used for the start and end cells and dead ends
    End,
    /// Two opposite openings
    Straight,
    /// Two adjacent openings
    Corner,
    /// Three openings
    Tee,
    /// All four openings
    Cross,
    /// Obstacle with no openings; never rotatable
    Block,
}

impl TileKind {
    /// Every kind that carries at least one opening, in matching priority order
    pub const PIPES: [Self; 5] = [
        Self::End,
        Self::Straight,
        Self::Corner,
        Self::Tee,
        Self::Cross,
    ];

    /// Open directions at rotation 0
    pub const fn canonical_openings(self) -> DirectionSet {
        // Bits are N=1, E=2, S=4, W=8
        match self {
            Self::End => DirectionSet::from_bits(0b0001),
            Self::Straight => DirectionSet::from_bits(0b0101),
            Self::Corner => DirectionSet::from_bits(0b0011),
            Self::Tee => DirectionSet::from_bits(0b1011),
            Self::Cross => DirectionSet::ALL,
            Self::Block => DirectionSet::EMPTY,
        }
    }
}

/// A placed tile: kind plus clockwise quarter-turn count
///
/// The rotation is always in `0..ROTATIONS`. Serialized as
/// `{ "kind": "corner", "rotation": 1 }`; deserializing a rotation outside
/// that range is an error rather than being wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRecord", into = "TileRecord")]
pub struct Tile {
    kind: TileKind,
    rotation: u8,
}

impl Tile {
    /// Obstacle tile
    pub const BLOCK: Self = Self {
        kind: TileKind::Block,
        rotation: 0,
    };

    /// Create a tile, wrapping the rotation modulo 4
    pub const fn new(kind: TileKind, rotation: u8) -> Self {
        Self {
            kind,
            rotation: rotation % ROTATIONS,
        }
    }

    /// Tile kind
    pub const fn kind(self) -> TileKind {
        self.kind
    }

    /// Clockwise quarter turns from the canonical orientation
    pub const fn rotation(self) -> u8 {
        self.rotation
    }

    /// Directions this tile is open toward in its current rotation
    pub const fn open_directions(self) -> DirectionSet {
        self.kind.canonical_openings().rotated(self.rotation)
    }

    /// Test whether the tile is open toward `direction`
    pub const fn opens(self, direction: Direction) -> bool {
        self.open_directions().contains(direction)
    }

    /// Whether a player may turn this tile
    pub const fn is_rotatable(self) -> bool {
        !matches!(self.kind, TileKind::Block)
    }

    /// Same tile turned one quarter clockwise; a block is returned unchanged
    #[must_use]
    pub const fn rotated(self) -> Self {
        if self.is_rotatable() {
            Self::new(self.kind, self.rotation + 1)
        } else {
            self
        }
    }

    /// Find the tile whose open directions are exactly `openings`
    ///
    /// Kinds are tried in `TileKind::PIPES` order and rotations from 0 upward,
    /// so symmetric kinds resolve to their lowest matching rotation. Returns
    /// `None` for the empty set, which only a block can represent.
    pub fn matching(openings: DirectionSet) -> Option<Self> {
        if openings.is_empty() {
            return None;
        }

        TileKind::PIPES
            .into_iter()
            .filter(|kind| kind.canonical_openings().len() == openings.len())
            .flat_map(|kind| (0..ROTATIONS).map(move |rotation| Self::new(kind, rotation)))
            .find(|tile| tile.open_directions() == openings)
    }
}

/// Plain persisted form of a tile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TileRecord {
    kind: TileKind,
    rotation: u8,
}

impl TryFrom<TileRecord> for Tile {
    type Error = PuzzleError;

    fn try_from(record: TileRecord) -> Result<Self, Self::Error> {
        if record.rotation >= ROTATIONS {
            return Err(invalid_grid(&format!(
                "rotation {} is outside 0..{ROTATIONS}",
                record.rotation
            )));
        }

        Ok(Self {
            kind: record.kind,
            rotation: record.rotation,
        })
    }
}

impl From<Tile> for TileRecord {
    fn from(tile: Tile) -> Self {
        Self {
            kind: tile.kind,
            rotation: tile.rotation,
        }
    }
}
