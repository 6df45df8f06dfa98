#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded wandering behaviour for riders and enemies.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wild_west_core::{Command, Direction, EnemyView, RiderView};

/// Rider choices; half of the outcomes keep the rider in place.
const RIDER_CHOICES: [Option<Direction>; 8] = [
    Some(Direction::Up),
    Some(Direction::Down),
    Some(Direction::Left),
    Some(Direction::Right),
    None,
    None,
    None,
    None,
];

/// Configuration parameters required to construct the wandering system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that proposes one random step per rider and enemy.
#[derive(Debug)]
pub struct Wandering {
    rng: ChaCha8Rng,
}

impl Wandering {
    /// Creates a new wandering system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Emits step commands for every rider, then for every enemy, in id order.
    ///
    /// Riders wait with probability one half and emit nothing when they do.
    /// Enemies always attempt a step.
    pub fn handle(&mut self, riders: &RiderView, enemies: &EnemyView, out: &mut Vec<Command>) {
        for rider in riders.iter() {
            if let Some(Some(direction)) = RIDER_CHOICES.choose(&mut self.rng).copied() {
                out.push(Command::StepRider {
                    rider: rider.id,
                    direction,
                });
            }
        }

        for enemy in enemies.iter() {
            if let Some(direction) = Direction::ALL.choose(&mut self.rng).copied() {
                out.push(Command::StepEnemy {
                    enemy: enemy.id,
                    direction,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_views_emit_nothing() {
        let mut wandering = Wandering::new(Config::new(3));
        let mut out = Vec::new();

        wandering.handle(&RiderView::default(), &EnemyView::default(), &mut out);

        assert!(out.is_empty());
    }
}
