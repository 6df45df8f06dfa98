//! Ordered collection of level maps played in sequence.

use thiserror::Error;
use wild_west_core::{LevelError, LevelMap};

const BUILTIN_LEVELS: [[&str; 10]; 3] = [
    [
        "##########",
        "#$..#...X#",
        "#..T#.R..#",
        "#...#....#",
        "#.E....$.#",
        "#....##..#",
        "#.$......#",
        "#...T..E.#",
        "#........#",
        "##########",
    ],
    [
        "##########",
        "#X...#..$#",
        "#..E.#...#",
        "#....#.R.#",
        "#.##...T.#",
        "#.$..E...#",
        "#...####.#",
        "#.R......#",
        "#..$.....#",
        "##########",
    ],
    [
        "#####X####",
        "#.E.....$#",
        "#..T#.R..#",
        "#...#....#",
        "#.$.#..E.#",
        "#...###..#",
        "#.R....T.#",
        "#..E.....#",
        "#$.......#",
        "##########",
    ],
];

/// Reasons a campaign cannot be assembled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// The campaign would contain no playable level.
    #[error("campaign contains no levels")]
    Empty,
    /// One of the level maps failed validation.
    #[error("level {index} is malformed: {source}")]
    Level {
        /// Zero-based index of the malformed level.
        index: usize,
        /// Validation failure reported for the map.
        source: LevelError,
    },
}

/// Non-empty ordered list of levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    levels: Vec<LevelMap>,
}

impl Campaign {
    /// Creates a campaign from already validated maps.
    pub fn new(levels: Vec<LevelMap>) -> Result<Self, CampaignError> {
        if levels.is_empty() {
            return Err(CampaignError::Empty);
        }
        Ok(Self { levels })
    }

    /// Validates raw map rows and assembles them into a campaign.
    pub fn from_rows<L, R, S>(levels: L) -> Result<Self, CampaignError>
    where
        L: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels = levels
            .into_iter()
            .enumerate()
            .map(|(index, rows)| {
                LevelMap::from_rows(rows).map_err(|source| CampaignError::Level { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    /// Three-level desert campaign shipped with the game.
    pub fn builtin() -> Result<Self, CampaignError> {
        Self::from_rows(BUILTIN_LEVELS)
    }

    /// Number of levels in the campaign.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; campaigns hold at least one level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Map for the level at `index`, if the campaign has one.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&LevelMap> {
        self.levels.get(index)
    }
}
