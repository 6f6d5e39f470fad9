//! Cardinal directions and compact direction sets
//!
//! Directions are ordered clockwise starting from north. A `DirectionSet` packs
//! up to four directions into the low nibble of a byte so that rotating a set
//! is a 4-bit cyclic shift.

use std::fmt;

/// One of the four cardinal directions on the board
///
/// Row 0 is the top of the grid, so north decreases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward row - 1
    North,
    /// Toward col + 1
    East,
    /// Toward row + 1
    South,
    /// Toward col - 1
    West,
}

impl Direction {
    /// All directions in clockwise order starting from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of the direction in the clockwise cycle (north = 0)
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Direction at a clockwise cycle position, wrapping modulo 4
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// The direction reached after `quarter_turns` clockwise quarter turns
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + quarter_turns % 4)
    }

    /// Unit displacement as (row delta, col delta)
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        };
        f.write_str(label)
    }
}

/// Set of open directions stored as a 4-bit mask
///
/// Bit `i` is set when `Direction::from_index(i)` is a member. Iteration
/// always yields members in clockwise order starting from north.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    const MASK: u8 = 0b1111;

    /// Set with no directions
    pub const EMPTY: Self = Self(0);

    /// Set with all four directions
    pub const ALL: Self = Self(Self::MASK);

    /// Build a set from a slice of directions (duplicates are ignored)
    pub fn from_directions(directions: &[Direction]) -> Self {
        directions.iter().fold(Self::EMPTY, |set, &d| set.with(d))
    }

    /// Build a set from its raw bit mask, ignoring bits above the low nibble
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw bit mask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Add a direction in place
    pub const fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Copy of this set with `direction` added
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Test membership
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Number of member directions
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Test if no direction is open
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Rotate every member `quarter_turns` steps clockwise
    #[must_use]
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        let k = quarter_turns % 4;
        if k == 0 {
            return self;
        }
        Self(((self.0 << k) | (self.0 >> (4 - k))) & Self::MASK)
    }

    /// Iterate members clockwise from north
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, direction) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}")?;
        }
        f.write_str("}")
    }
}
