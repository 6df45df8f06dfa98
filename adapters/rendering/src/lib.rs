#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Wild West adapters.

mod text;

use anyhow::Result as AnyResult;
use std::{error::Error, fmt};
use wild_west_core::{EntityKind, SceneObject, Snapshot};

pub use text::TextBackend;

/// Glyph drawn for cells without any object.
pub const FLOOR_GLYPH: char = '.';

/// Returns the glyph used by text backends for the provided kind.
#[must_use]
pub const fn glyph(kind: EntityKind) -> char {
    match kind {
        EntityKind::Player => '@',
        EntityKind::Cactus => '#',
        EntityKind::Coin => '$',
        EntityKind::CaveEntrance => 'X',
        EntityKind::Trap => 'T',
        EntityKind::RiderEnemy => 'R',
        EntityKind::Bullet => '*',
        EntityKind::EnemyBullet => 'o',
        EntityKind::Enemy => 'E',
    }
}

/// Dimensions of the drawable grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPresentation {
    /// Number of columns drawn.
    pub columns: u32,
    /// Number of rows drawn.
    pub rows: u32,
}

impl GridPresentation {
    /// Creates a new grid descriptor, rejecting empty dimensions.
    pub fn new(columns: u32, rows: u32) -> std::result::Result<Self, RenderingError> {
        if columns == 0 || rows == 0 {
            return Err(RenderingError::EmptyGrid { columns, rows });
        }

        Ok(Self { columns, rows })
    }

    /// Number of cells covered by the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Values shown beside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hud {
    /// Player health.
    pub health: i32,
    /// Coins collected so far.
    pub coins: u32,
    /// One-based level number.
    pub level: usize,
}

/// Scene description combining the grid, its inhabitants and the HUD.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// Grid the objects are placed on.
    pub grid: GridPresentation,
    /// Objects in painter's order; later objects cover earlier ones.
    pub objects: Vec<SceneObject>,
    /// Scalar values drawn next to the grid.
    pub hud: Hud,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub const fn new(grid: GridPresentation, objects: Vec<SceneObject>, hud: Hud) -> Self {
        Self { grid, objects, hud }
    }

    /// Builds a scene from a world snapshot, sized to the active level.
    pub fn from_snapshot(snapshot: &Snapshot) -> std::result::Result<Self, RenderingError> {
        let grid = GridPresentation::new(snapshot.columns, snapshot.rows)?;
        Ok(Self::new(
            grid,
            snapshot.objects.clone(),
            Hud {
                health: snapshot.health,
                coins: snapshot.coins,
                level: snapshot.level.saturating_add(1),
            },
        ))
    }

    /// Glyph visible at the provided cell after painting every object.
    #[must_use]
    pub fn glyph_at(&self, column: u32, row: u32) -> char {
        self.objects
            .iter()
            .rev()
            .find(|object| {
                u32::from(object.position.x()) == column && u32::from(object.position.y()) == row
            })
            .map_or(FLOOR_GLYPH, |object| glyph(object.kind))
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Title shown once before the first frame.
    pub title: String,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(title: T, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            scene,
        }
    }
}

/// Rendering backend capable of presenting Wild West scenes.
pub trait RenderingBackend {
    /// Draws a single frame.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;

    /// Shows a full-screen text card such as a cutscene or the title.
    fn announce(&mut self, message: &str) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// A grid needs at least one column and one row.
    EmptyGrid {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { columns, rows } => {
                write!(f, "grid must not be empty (received {columns}x{rows})")
            }
        }
    }
}

impl Error for RenderingError {}
