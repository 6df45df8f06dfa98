//! ASCII level maps and the symbols they contain.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::{Position, GRID_SIZE};

/// Level feature encoded by a single map symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `T`: kills the player on contact.
    Trap,
    /// `#`: impassable cactus.
    Wall,
    /// `X`: advances the campaign when entered.
    CaveEntrance,
    /// `$`: collectible coin.
    Coin,
    /// `R`: randomly wandering rider.
    Rider,
    /// `E`: wandering, shooting enemy.
    Enemy,
}

impl Tile {
    /// Decodes a map symbol. Unknown symbols are floor and yield `None`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'T' => Some(Self::Trap),
            '#' => Some(Self::Wall),
            'X' => Some(Self::CaveEntrance),
            '$' => Some(Self::Coin),
            'R' => Some(Self::Rider),
            'E' => Some(Self::Enemy),
            _ => None,
        }
    }

    /// Symbol used for the tile in map text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Trap => 'T',
            Self::Wall => '#',
            Self::CaveEntrance => 'X',
            Self::Coin => '$',
            Self::Rider => 'R',
            Self::Enemy => 'E',
        }
    }
}

/// Reasons a level map is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The map has no rows or its rows are empty.
    #[error("level map is empty")]
    Empty,
    /// The map does not fit on the playing field.
    #[error(
        "level map is {columns}x{rows}, which exceeds the {size}x{size} grid",
        size = GRID_SIZE
    )]
    TooLarge {
        /// Width of the widest row.
        columns: usize,
        /// Number of rows.
        rows: usize,
    },
    /// A row differs in length from the first row.
    #[error("row {row} has {found} cells but the map is {expected} cells wide")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Rectangular ASCII map; row index is `y` and column index is `x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelMap {
    rows: Vec<String>,
}

impl LevelMap {
    /// Validates the provided rows and builds a level map.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, LevelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let Some(first) = rows.first() else {
            return Err(LevelError::Empty);
        };

        let expected = first.chars().count();
        if expected == 0 {
            return Err(LevelError::Empty);
        }

        let widest = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(expected);
        let limit = usize::from(GRID_SIZE);
        if widest > limit || rows.len() > limit {
            return Err(LevelError::TooLarge {
                columns: widest,
                rows: rows.len(),
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.chars().count())
            .enumerate()
            .find(|(_, width)| *width != expected)
        {
            return Err(LevelError::Ragged {
                row,
                expected,
                found,
            });
        }

        Ok(Self { rows })
    }

    /// Raw rows of the map.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Width of the map in cells.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    /// Recognised tiles in scan order: row by row, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.chars().enumerate().filter_map(move |(x, symbol)| {
                Tile::from_symbol(symbol).map(|tile| (Position::from_raw(x as u8, y as u8), tile))
            })
        })
    }
}

impl<'de> Deserialize<'de> for LevelMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        LevelMap::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
