//! Grid coordinates and facing directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the board's concern, not the coordinate's.
    #[must_use]
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions an organ can face.
///
/// Organs without a facing (ROOT, BASIC) carry `None` in an
/// `Option<Direction>`; that case renders as `X` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards increasing x.
    East,
    /// Towards increasing y.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All four directions in N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset `(dx, dy)` for one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i16, i16) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Wire symbol for this direction.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parse a wire symbol. `X` and anything unknown mean "no facing".
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

/// Wire symbol for an optional facing (`X` when absent).
#[must_use]
pub fn facing_symbol(facing: Option<Direction>) -> char {
    facing.map_or('X', Direction::symbol)
}
