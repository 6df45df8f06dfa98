#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Wild West engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! happened. Systems read immutable views such as [`EnemyView`] and respond
//! exclusively with new command batches.

mod grid;
mod level;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use grid::{resolve_move, Direction, OccupancySet, Position, GRID_SIZE};
pub use level::{LevelError, LevelMap, Tile};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Wild West! Press any button to start";

/// Health the player starts the campaign with.
pub const PLAYER_STARTING_HEALTH: i32 = 10;

/// Health assigned to every enemy when a level is loaded.
pub const ENEMY_STARTING_HEALTH: i32 = 5;

/// Value credited to the player when a map coin is collected.
pub const COIN_VALUE: u32 = 10;

/// Number of ticks an enemy waits between shots.
pub const ENEMY_SHOT_INTERVAL: u32 = 3;

/// Errors raised by core value types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A coordinate pair was constructed outside the playing field.
    #[error("position ({x}, {y}) lies outside the {size}x{size} grid", size = GRID_SIZE)]
    InvalidPosition {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },
}

/// Single player action produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step one cell in the provided direction.
    Move(Direction),
    /// Leap two columns to the right, ignoring anything in between.
    ///
    /// A landing beyond the last column is rejected and the player stays put.
    Jump,
    /// Fire a bullet in the direction the player last moved.
    Shoot,
}

/// Pending level transition awaiting the orchestrator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Nothing is pending.
    #[default]
    None,
    /// The player entered a cave and the next level was loaded.
    NewLevel,
    /// The player left the final level; the campaign is complete.
    GameOver,
    /// The player touched a trap or a rider.
    YouDied,
}

impl Transition {
    /// Reports whether the transition still needs to be consumed.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::NewLevel => "new level",
            Self::GameOver => "game over",
            Self::YouDied => "you died",
        }
    }
}

/// Identifies which side fired a bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulletOwner {
    /// Fired by the player; damages enemies.
    Player,
    /// Fired by an enemy; damages the player.
    Enemy,
}

/// Unique identifier assigned to an enemy within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a rider within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiderId(u32);

impl RiderId {
    /// Creates a new rider identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Collectible coin lying on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Cell holding the coin.
    pub position: Position,
    /// Amount credited on pickup.
    pub value: u32,
}

/// Projectile travelling one cell per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bullet {
    /// Cell currently occupied by the bullet.
    pub position: Position,
    /// Direction of travel.
    pub direction: Direction,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the level contents with the campaign level at `level`.
    LoadLevel {
        /// Zero-based campaign index.
        level: usize,
        /// Cell the player is placed on.
        spawn: Position,
    },
    /// Applies a single player action.
    PerformAction {
        /// Action selected by the input layer.
        action: Action,
    },
    /// Requests that a rider attempt a single step.
    StepRider {
        /// Rider attempting to move.
        rider: RiderId,
        /// Direction of the attempted step.
        direction: Direction,
    },
    /// Requests that an enemy attempt a single step.
    StepEnemy {
        /// Enemy attempting to move.
        enemy: EnemyId,
        /// Direction of the attempted step.
        direction: Direction,
    },
    /// Advances projectiles and enemy shooting by one tick.
    Tick,
    /// Consumes the pending transition, resetting it to [`Transition::None`].
    AcknowledgeTransition,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A level was loaded and all transient state replaced.
    LevelLoaded {
        /// Zero-based campaign index.
        level: usize,
        /// Cell the player was placed on.
        spawn: Position,
    },
    /// A level load referenced an index beyond the campaign.
    LevelMissing {
        /// Requested campaign index.
        level: usize,
    },
    /// The player ended an action on a different cell.
    PlayerMoved {
        /// Cell occupied before the action.
        from: Position,
        /// Cell occupied after the action.
        to: Position,
    },
    /// A jump was refused because it would leave the grid.
    JumpRejected {
        /// Cell the player jumped from.
        from: Position,
    },
    /// The player fired a bullet.
    BulletFired {
        /// Cell the bullet was spawned on.
        at: Position,
        /// Direction of travel.
        direction: Direction,
    },
    /// The player picked up a coin.
    CoinCollected {
        /// Cell the coin was lying on.
        at: Position,
        /// Value credited.
        value: u32,
        /// Player coin total after the pickup.
        total: u32,
    },
    /// A transition became pending.
    TransitionRaised {
        /// Transition awaiting consumption.
        transition: Transition,
    },
    /// A pending transition was consumed.
    TransitionCleared {
        /// Transition that had been pending.
        transition: Transition,
    },
    /// A rider moved between two cells.
    RiderMoved {
        /// Rider that moved.
        rider: RiderId,
        /// Cell occupied before the step.
        from: Position,
        /// Cell occupied after the step.
        to: Position,
    },
    /// An enemy moved between two cells.
    EnemyMoved {
        /// Enemy that moved.
        enemy: EnemyId,
        /// Cell occupied before the step.
        from: Position,
        /// Cell occupied after the step.
        to: Position,
    },
    /// The simulation clock advanced by one tick.
    TimeAdvanced {
        /// Number of ticks processed since the world was created.
        tick: u64,
    },
    /// A blocked bullet was removed from the world.
    BulletDespawned {
        /// Cell the bullet was stuck on.
        at: Position,
        /// Side that fired the bullet.
        owner: BulletOwner,
    },
    /// A player bullet struck an enemy.
    EnemyHit {
        /// Enemy that was struck.
        enemy: EnemyId,
        /// Remaining health after the hit.
        health: i32,
    },
    /// An enemy ran out of health and was removed.
    EnemyDefeated {
        /// Enemy that was removed.
        enemy: EnemyId,
        /// Cell the enemy occupied.
        at: Position,
    },
    /// An enemy bullet struck the player.
    PlayerHit {
        /// Remaining player health.
        health: i32,
    },
    /// An enemy fired a bullet.
    EnemyFired {
        /// Enemy that fired.
        enemy: EnemyId,
        /// Cell the bullet was spawned on.
        at: Position,
        /// Direction of travel.
        direction: Direction,
    },
}

/// Immutable representation of the player used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Cell occupied by the player.
    pub position: Position,
    /// Remaining health; may drop below zero.
    pub health: i32,
    /// Coins collected so far.
    pub coins: u32,
    /// Direction used to orient shots.
    pub last_direction: Direction,
}

/// Immutable representation of a single enemy used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Cell occupied by the enemy.
    pub position: Position,
    /// Remaining health, always positive.
    pub health: i32,
    /// Direction of the last successful step; shots travel this way.
    pub last_direction: Direction,
    /// Ticks accumulated toward the next shot.
    pub shoot_counter: u32,
}

/// Read-only snapshot describing all enemies within the level.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single rider used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiderSnapshot {
    /// Unique identifier assigned to the rider.
    pub id: RiderId,
    /// Cell occupied by the rider.
    pub position: Position,
}

/// Read-only snapshot describing all riders within the level.
#[derive(Clone, Debug, Default)]
pub struct RiderView {
    snapshots: Vec<RiderSnapshot>,
}

impl RiderView {
    /// Creates a new rider view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<RiderSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured rider snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &RiderSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<RiderSnapshot> {
        self.snapshots
    }
}

/// Kinds of objects presented to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The player character.
    Player,
    /// Impassable wall tile.
    Cactus,
    /// Collectible coin.
    Coin,
    /// Level exit.
    CaveEntrance,
    /// Deadly trap.
    Trap,
    /// Randomly wandering rider.
    RiderEnemy,
    /// Bullet fired by the player.
    Bullet,
    /// Bullet fired by an enemy.
    EnemyBullet,
    /// Shooting enemy.
    Enemy,
}

impl EntityKind {
    /// Stable label identifying the kind, used to look up sprites.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Cactus => "cactus",
            Self::Coin => "coin",
            Self::CaveEntrance => "cave_entrance",
            Self::Trap => "trap",
            Self::RiderEnemy => "rider_enemy",
            Self::Bullet => "bullet",
            Self::EnemyBullet => "enemy_bullet",
            Self::Enemy => "enemy",
        }
    }
}

/// Single object placed on the grid for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneObject {
    /// Cell occupied by the object.
    pub position: Position,
    /// Kind of object.
    pub kind: EntityKind,
}

/// Everything a renderer needs to draw one frame.
///
/// Objects are ordered: player first, then walls, coins, cave entrances,
/// traps, riders, player bullets, enemy bullets and enemies, each category in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Objects in draw order.
    pub objects: Vec<SceneObject>,
    /// Player health for the HUD.
    pub health: i32,
    /// Player coin total for the HUD.
    pub coins: u32,
    /// Zero-based index of the active level.
    pub level: usize,
    /// Column count of the active level map.
    pub columns: u32,
    /// Row count of the active level map.
    pub rows: u32,
}
