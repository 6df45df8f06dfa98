#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame pacing and game state machine driving the Wild West world.
//!
//! The progression system owns the wandering AI, decides when a simulation
//! tick runs, forwards player actions to the world, and consumes the world's
//! transition flag exactly once per raise.

use tracing::{debug, info};
use wild_west_core::{Action, Command, Event, Transition};
use wild_west_system_wandering::{self as wandering, Wandering};
use wild_west_world::{self as world, query, World};

/// Number of frames between simulation ticks unless configured otherwise.
pub const DEFAULT_FRAMES_PER_TICK: u32 = 25;

/// Configuration parameters required to construct the progression system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    frames_per_tick: u32,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration. A zero cadence is raised to one frame.
    #[must_use]
    pub fn new(frames_per_tick: u32, rng_seed: u64) -> Self {
        Self {
            frames_per_tick: frames_per_tick.max(1),
            rng_seed,
        }
    }

    /// Frames that elapse between two simulation ticks.
    #[must_use]
    pub const fn frames_per_tick(&self) -> u32 {
        self.frames_per_tick
    }

    /// Seed used by the wandering AI.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES_PER_TICK, 0)
    }
}

/// High level state of a running game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The player is in control and ticks advance.
    #[default]
    Playing,
    /// A new level was entered; waiting for the front end to resume.
    LevelTransition,
    /// The player stepped on a trap or ran into a rider.
    Dead,
    /// The final cave entrance was taken.
    Completed,
}

impl GameState {
    /// State reached after consuming `transition`.
    #[must_use]
    pub const fn after(transition: Transition) -> Self {
        match transition {
            Transition::None => Self::Playing,
            Transition::NewLevel => Self::LevelTransition,
            Transition::YouDied => Self::Dead,
            Transition::GameOver => Self::Completed,
        }
    }

    /// Reports whether the game has ended for good.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead | Self::Completed)
    }

    /// Lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::LevelTransition => "level_transition",
            Self::Dead => "dead",
            Self::Completed => "completed",
        }
    }
}

/// Drives ticks, actions and transitions against a world.
#[derive(Debug)]
pub struct Progression {
    wandering: Wandering,
    frames_per_tick: u32,
    countdown: u32,
    state: GameState,
}

impl Progression {
    /// Creates a new progression system in the [`GameState::Playing`] state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            wandering: Wandering::new(wandering::Config::new(config.rng_seed)),
            frames_per_tick: config.frames_per_tick,
            countdown: config.frames_per_tick,
            state: GameState::Playing,
        }
    }

    /// Current state of the game.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Frames left until the next simulation tick.
    #[must_use]
    pub const fn frames_until_tick(&self) -> u32 {
        self.countdown
    }

    /// Leaves [`GameState::LevelTransition`] once the front end has shown
    /// the level change. Returns `false` in every other state.
    pub fn resume(&mut self) -> bool {
        if self.state != GameState::LevelTransition {
            return false;
        }

        debug!("resuming play");
        self.state = GameState::Playing;
        true
    }

    /// Runs one simulation tick: riders and enemies wander, then projectiles
    /// fly and enemies fire.
    pub fn tick(&mut self, world: &mut World, out_events: &mut Vec<Event>) -> Option<Transition> {
        if self.state != GameState::Playing {
            return None;
        }

        let mut commands = Vec::new();
        self.wandering.handle(
            &query::rider_view(world),
            &query::enemy_view(world),
            &mut commands,
        );
        commands.push(Command::Tick);
        for command in commands {
            world::apply(world, command, out_events);
        }

        self.consume_transition(world, out_events)
    }

    /// Dispatches a player action and consumes any transition it raised.
    pub fn apply_action(
        &mut self,
        world: &mut World,
        action: Action,
        out_events: &mut Vec<Event>,
    ) -> Option<Transition> {
        if self.state != GameState::Playing {
            return None;
        }

        world::apply(world, Command::PerformAction { action }, out_events);
        self.consume_transition(world, out_events)
    }

    /// Advances one frame of the control loop.
    ///
    /// The countdown is decremented first; when it reaches zero a tick runs
    /// and the countdown restarts. The input action, if any, is dispatched
    /// afterwards unless the tick ended play.
    pub fn step_frame(
        &mut self,
        world: &mut World,
        input: Option<Action>,
        out_events: &mut Vec<Event>,
    ) -> Option<Transition> {
        if self.state != GameState::Playing {
            return None;
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.countdown = self.frames_per_tick;
            if let Some(transition) = self.tick(world, out_events) {
                return Some(transition);
            }
        }

        input.and_then(|action| self.apply_action(world, action, out_events))
    }

    fn consume_transition(
        &mut self,
        world: &mut World,
        out_events: &mut Vec<Event>,
    ) -> Option<Transition> {
        let transition = query::transition(world);
        if !transition.is_pending() {
            return None;
        }

        world::apply(world, Command::AcknowledgeTransition, out_events);
        self.state = GameState::after(transition);
        info!(
            transition = transition.as_str(),
            state = self.state.as_str(),
            level = query::level_number(world),
            "game state changed"
        );
        Some(transition)
    }
}
