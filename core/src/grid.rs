//! Grid coordinates, directions and the movement resolver.

use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Number of cells along each edge of the square playing field.
pub const GRID_SIZE: u8 = 10;

const MAX_COORDINATE: u8 = GRID_SIZE - 1;

/// Location of a single grid cell.
///
/// Values are guaranteed to lie within `[0, 9] x [0, 9]`; use
/// [`Position::new`] or [`Position::offset`] to construct them from untrusted
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position, rejecting coordinates outside the grid.
    pub fn new(x: u32, y: u32) -> Result<Self, CoreError> {
        Self::from_signed(i64::from(x), i64::from(y))
    }

    pub(crate) const fn from_raw(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the cell.
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Zero-based row of the cell.
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Translates the position by the provided delta.
    ///
    /// Unlike [`resolve_move`] this never clamps or wraps: a destination
    /// outside the grid yields [`CoreError::InvalidPosition`].
    pub fn offset(self, dx: i32, dy: i32) -> Result<Self, CoreError> {
        Self::from_signed(
            i64::from(self.x) + i64::from(dx),
            i64::from(self.y) + i64::from(dy),
        )
    }

    fn from_signed(x: i64, y: i64) -> Result<Self, CoreError> {
        let range = 0..=i64::from(MAX_COORDINATE);
        if !range.contains(&x) || !range.contains(&y) {
            return Err(CoreError::InvalidPosition { x, y });
        }
        Ok(Self::from_raw(x as u8, y as u8))
    }

    /// Single-step destination ignoring occupancy.
    ///
    /// `Right`, `Left` and `Up` stop at the grid edge while `Down` wraps from
    /// the bottom row back to the top row.
    #[must_use]
    pub const fn candidate(self, direction: Direction) -> Self {
        let Self { x, y } = self;
        match direction {
            Direction::Right if x < MAX_COORDINATE => Self::from_raw(x + 1, y),
            Direction::Left if x > 0 => Self::from_raw(x - 1, y),
            Direction::Up if y > 0 => Self::from_raw(x, y - 1),
            Direction::Down if y < MAX_COORDINATE => Self::from_raw(x, y + 1),
            Direction::Down => Self::from_raw(x, 0),
            _ => self,
        }
    }

    const fn index(self) -> u32 {
        self.y as u32 * GRID_SIZE as u32 + self.x as u32
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Position")]
        struct Coordinates {
            x: u8,
            y: u8,
        }

        let Coordinates { x, y } = Coordinates::deserialize(deserializer)?;
        Position::new(u32::from(x), u32::from(y)).map_err(serde::de::Error::custom)
    }
}

/// Cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward decreasing row indices.
    Up,
    /// Toward increasing row indices, wrapping at the bottom edge.
    Down,
    /// Toward decreasing column indices.
    Left,
    /// Toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase label used by adapters and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Set of grid cells treated as blocking for a single move resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OccupancySet {
    bits: u128,
}

impl OccupancySet {
    /// Creates a set that blocks nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Marks the position as occupied, returning `true` when it was previously free.
    pub fn insert(&mut self, position: Position) -> bool {
        let mask = 1u128 << position.index();
        let newly_inserted = self.bits & mask == 0;
        self.bits |= mask;
        newly_inserted
    }

    /// Reports whether the position is occupied.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        self.bits & (1u128 << position.index()) != 0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Reports whether no cell is occupied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Position> for OccupancySet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Position> for OccupancySet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for position in iter {
            let _ = self.insert(position);
        }
    }
}

/// Resolves a single-step move against the provided occupancy.
///
/// Returns the candidate cell from [`Position::candidate`] unless it is
/// occupied, in which case the original position is returned unchanged.
#[must_use]
pub fn resolve_move(position: Position, direction: Direction, occupied: &OccupancySet) -> Position {
    let candidate = position.candidate(direction);
    if occupied.contains(candidate) {
        position
    } else {
        candidate
    }
}
