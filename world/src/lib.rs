#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Wild West.

mod actions;
mod campaign;
mod projectiles;

use tracing::{debug, info, warn};
use wild_west_core::{
    resolve_move, Bullet, Coin, Command, Direction, EnemyId, Event, LevelMap, OccupancySet,
    Position, RiderId, Tile, Transition, COIN_VALUE, ENEMY_STARTING_HEALTH,
    PLAYER_STARTING_HEALTH, WELCOME_BANNER,
};

pub use campaign::{Campaign, CampaignError};

/// Cell the player is placed on whenever a level starts.
pub const DEFAULT_SPAWN: (u32, u32) = (4, 8);

/// Represents the authoritative Wild West world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    campaign: Campaign,
    spawn: Position,
    level_number: usize,
    columns: u32,
    rows: u32,
    player: Player,
    walls: Vec<Position>,
    coins: Vec<Coin>,
    cave_entrances: Vec<Position>,
    traps: Vec<Position>,
    riders: Vec<Rider>,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    enemy_bullets: Vec<Bullet>,
    transition: Transition,
    tick_index: u64,
}

impl World {
    /// Creates a world positioned at the start of the campaign's first level.
    ///
    /// `spawn` is also used as the respawn cell whenever a cave entrance
    /// advances the campaign. The first level load is reported through
    /// `out_events` like every later one.
    pub fn new(campaign: Campaign, spawn: Position, out_events: &mut Vec<Event>) -> Self {
        let mut world = Self {
            banner: WELCOME_BANNER,
            campaign,
            spawn,
            level_number: 0,
            columns: 0,
            rows: 0,
            player: Player::new(spawn),
            walls: Vec::new(),
            coins: Vec::new(),
            cave_entrances: Vec::new(),
            traps: Vec::new(),
            riders: Vec::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            transition: Transition::None,
            tick_index: 0,
        };
        world.load_level(0, spawn, out_events);
        world
    }

    fn load_level(&mut self, level: usize, spawn: Position, out_events: &mut Vec<Event>) {
        let Some(map) = self.campaign.level(level).cloned() else {
            warn!(level, "campaign has no such level");
            out_events.push(Event::LevelMissing { level });
            return;
        };

        self.populate(&map, spawn);
        info!(
            level,
            walls = self.walls.len(),
            coins = self.coins.len(),
            riders = self.riders.len(),
            enemies = self.enemies.len(),
            "level loaded"
        );
        out_events.push(Event::LevelLoaded { level, spawn });
    }

    fn populate(&mut self, map: &LevelMap, spawn: Position) {
        self.player.position = spawn;
        self.columns = u32::try_from(map.columns()).unwrap_or(u32::MAX);
        self.rows = u32::try_from(map.rows().len()).unwrap_or(u32::MAX);
        self.traps.clear();
        self.walls.clear();
        self.coins.clear();
        self.cave_entrances.clear();
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.riders.clear();
        self.enemies.clear();

        let mut next_rider = 0;
        let mut next_enemy = 0;
        for (position, tile) in map.tiles() {
            match tile {
                Tile::Trap => self.traps.push(position),
                Tile::Wall => self.walls.push(position),
                Tile::CaveEntrance => self.cave_entrances.push(position),
                Tile::Coin => self.coins.push(Coin {
                    position,
                    value: COIN_VALUE,
                }),
                Tile::Rider => {
                    self.riders.push(Rider {
                        id: RiderId::new(next_rider),
                        position,
                    });
                    next_rider += 1;
                }
                Tile::Enemy => {
                    self.enemies
                        .push(Enemy::spawn(EnemyId::new(next_enemy), position));
                    next_enemy += 1;
                }
            }
        }
    }

    fn raise(&mut self, transition: Transition, out_events: &mut Vec<Event>) {
        info!(transition = transition.as_str(), "transition raised");
        self.transition = transition;
        out_events.push(Event::TransitionRaised { transition });
    }

    /// Cells that block riders and enemies.
    fn crowd_blockers(&self) -> OccupancySet {
        let mut occupied: OccupancySet = self.walls.iter().copied().collect();
        occupied.extend(self.riders.iter().map(|rider| rider.position));
        occupied.extend(self.enemies.iter().map(|enemy| enemy.position));
        occupied.extend(self.cave_entrances.iter().copied());
        occupied.extend(self.coins.iter().map(|coin| coin.position));
        occupied
    }

    /// Cells that stop bullets.
    fn projectile_blockers(&self) -> OccupancySet {
        self.walls
            .iter()
            .chain(self.cave_entrances.iter())
            .copied()
            .collect()
    }

    fn step_rider(&mut self, rider: RiderId, direction: Direction, out_events: &mut Vec<Event>) {
        let occupied = self.crowd_blockers();
        let Some(entry) = self.riders.iter_mut().find(|entry| entry.id == rider) else {
            return;
        };

        let from = entry.position;
        let to = resolve_move(from, direction, &occupied);
        if to != from {
            entry.position = to;
            out_events.push(Event::RiderMoved { rider, from, to });
        }
    }

    fn step_enemy(&mut self, enemy: EnemyId, direction: Direction, out_events: &mut Vec<Event>) {
        let occupied = self.crowd_blockers();
        let Some(entry) = self.enemies.iter_mut().find(|entry| entry.id == enemy) else {
            return;
        };

        let from = entry.position;
        let to = resolve_move(from, direction, &occupied);
        if to != from {
            entry.position = to;
            entry.last_direction = direction;
            out_events.push(Event::EnemyMoved { enemy, from, to });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadLevel { level, spawn } => {
            if world.campaign.level(level).is_some() {
                world.level_number = level;
            }
            world.load_level(level, spawn, out_events);
        }
        Command::PerformAction { action } => actions::perform(world, action, out_events),
        Command::StepRider { rider, direction } => world.step_rider(rider, direction, out_events),
        Command::StepEnemy { enemy, direction } => world.step_enemy(enemy, direction, out_events),
        Command::Tick => projectiles::advance(world, out_events),
        Command::AcknowledgeTransition => {
            let transition = std::mem::take(&mut world.transition);
            if transition.is_pending() {
                debug!(transition = transition.as_str(), "transition consumed");
                out_events.push(Event::TransitionCleared { transition });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use wild_west_core::{
        Bullet, Coin, EnemySnapshot, EnemyView, EntityKind, PlayerSnapshot, Position,
        RiderSnapshot, RiderView, SceneObject, Snapshot, Transition,
    };

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Zero-based index of the active level. Equals the campaign length once
    /// the final cave entrance has been taken.
    #[must_use]
    pub fn level_number(world: &World) -> usize {
        world.level_number
    }

    /// Number of levels in the campaign.
    #[must_use]
    pub fn level_count(world: &World) -> usize {
        world.campaign.len()
    }

    /// Cell the player respawns on when a new level starts.
    #[must_use]
    pub fn spawn(world: &World) -> Position {
        world.spawn
    }

    /// Transition awaiting consumption, if any.
    #[must_use]
    pub fn transition(world: &World) -> Transition {
        world.transition
    }

    /// Number of ticks processed since the world was created.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        let player = &world.player;
        PlayerSnapshot {
            position: player.position,
            health: player.health,
            coins: player.coins,
            last_direction: player.last_direction,
        }
    }

    /// Wall cells in map order.
    #[must_use]
    pub fn walls(world: &World) -> &[Position] {
        &world.walls
    }

    /// Coins still lying on the map.
    #[must_use]
    pub fn coins(world: &World) -> &[Coin] {
        &world.coins
    }

    /// Cave entrance cells in map order.
    #[must_use]
    pub fn cave_entrances(world: &World) -> &[Position] {
        &world.cave_entrances
    }

    /// Trap cells in map order.
    #[must_use]
    pub fn traps(world: &World) -> &[Position] {
        &world.traps
    }

    /// Bullets fired by the player.
    #[must_use]
    pub fn bullets(world: &World) -> &[Bullet] {
        &world.bullets
    }

    /// Bullets fired by enemies.
    #[must_use]
    pub fn enemy_bullets(world: &World) -> &[Bullet] {
        &world.enemy_bullets
    }

    /// Captures a read-only view of the enemies in the level.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        EnemyView::from_snapshots(
            world
                .enemies
                .iter()
                .map(|enemy| EnemySnapshot {
                    id: enemy.id,
                    position: enemy.position,
                    health: enemy.health,
                    last_direction: enemy.last_direction,
                    shoot_counter: enemy.shoot_counter,
                })
                .collect(),
        )
    }

    /// Captures a read-only view of the riders in the level.
    #[must_use]
    pub fn rider_view(world: &World) -> RiderView {
        RiderView::from_snapshots(
            world
                .riders
                .iter()
                .map(|rider| RiderSnapshot {
                    id: rider.id,
                    position: rider.position,
                })
                .collect(),
        )
    }

    /// Builds the draw list and HUD values consumed by renderers.
    #[must_use]
    pub fn snapshot(world: &World) -> Snapshot {
        let mut objects = Vec::with_capacity(
            1 + world.walls.len()
                + world.coins.len()
                + world.cave_entrances.len()
                + world.traps.len()
                + world.riders.len()
                + world.bullets.len()
                + world.enemy_bullets.len()
                + world.enemies.len(),
        );
        let mut place = |position: Position, kind: EntityKind| {
            objects.push(SceneObject { position, kind });
        };

        place(world.player.position, EntityKind::Player);
        for wall in &world.walls {
            place(*wall, EntityKind::Cactus);
        }
        for coin in &world.coins {
            place(coin.position, EntityKind::Coin);
        }
        for cave in &world.cave_entrances {
            place(*cave, EntityKind::CaveEntrance);
        }
        for trap in &world.traps {
            place(*trap, EntityKind::Trap);
        }
        for rider in &world.riders {
            place(rider.position, EntityKind::RiderEnemy);
        }
        for bullet in &world.bullets {
            place(bullet.position, EntityKind::Bullet);
        }
        for bullet in &world.enemy_bullets {
            place(bullet.position, EntityKind::EnemyBullet);
        }
        for enemy in &world.enemies {
            place(enemy.position, EntityKind::Enemy);
        }

        Snapshot {
            objects,
            health: world.player.health,
            coins: world.player.coins,
            level: world.level_number,
            columns: world.columns,
            rows: world.rows,
        }
    }
}

#[derive(Clone, Debug)]
struct Player {
    position: Position,
    health: i32,
    coins: u32,
    last_direction: Direction,
}

impl Player {
    fn new(position: Position) -> Self {
        Self {
            position,
            health: PLAYER_STARTING_HEALTH,
            coins: 0,
            last_direction: Direction::Up,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Rider {
    id: RiderId,
    position: Position,
}

#[derive(Clone, Copy, Debug)]
struct Enemy {
    id: EnemyId,
    position: Position,
    health: i32,
    last_direction: Direction,
    shoot_counter: u32,
}

impl Enemy {
    fn spawn(id: EnemyId, position: Position) -> Self {
        Self {
            id,
            position,
            health: ENEMY_STARTING_HEALTH,
            last_direction: Direction::Up,
            shoot_counter: 0,
        }
    }
}
