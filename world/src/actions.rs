//! Player action dispatch and the interactions it triggers.

use tracing::debug;
use wild_west_core::{resolve_move, Action, Bullet, Event, OccupancySet, Transition};

use crate::World;

const JUMP_DISTANCE: i32 = 2;

pub(crate) fn perform(world: &mut World, action: Action, out_events: &mut Vec<Event>) {
    let origin = world.player.position;

    match action {
        Action::Move(direction) => {
            let walls: OccupancySet = world.walls.iter().copied().collect();
            world.player.position = resolve_move(origin, direction, &walls);
            world.player.last_direction = direction;
        }
        Action::Jump => match origin.offset(JUMP_DISTANCE, 0) {
            Ok(landing) => world.player.position = landing,
            Err(error) => {
                debug!(%error, "jump rejected");
                out_events.push(Event::JumpRejected { from: origin });
            }
        },
        Action::Shoot => {
            let direction = world.player.last_direction;
            world.bullets.push(Bullet {
                position: origin,
                direction,
            });
            out_events.push(Event::BulletFired {
                at: origin,
                direction,
            });
        }
    }

    // Each check below observes whatever the previous ones left behind.
    if world.walls.contains(&world.player.position) {
        world.player.position = origin;
    }
    if world.player.position != origin {
        out_events.push(Event::PlayerMoved {
            from: origin,
            to: world.player.position,
        });
    }

    collect_coin(world, out_events);

    if world.cave_entrances.contains(&world.player.position) {
        enter_cave(world, out_events);
    }

    if world.traps.contains(&world.player.position) {
        world.raise(Transition::YouDied, out_events);
    }

    let position = world.player.position;
    if world.riders.iter().any(|rider| rider.position == position) {
        world.raise(Transition::YouDied, out_events);
    }
}

/// Picks up at most one coin lying under the player.
fn collect_coin(world: &mut World, out_events: &mut Vec<Event>) {
    let position = world.player.position;
    let Some(index) = world.coins.iter().position(|coin| coin.position == position) else {
        return;
    };

    let coin = world.coins.remove(index);
    world.player.coins = world.player.coins.saturating_add(coin.value);
    debug!(total = world.player.coins, "coin collected");
    out_events.push(Event::CoinCollected {
        at: position,
        value: coin.value,
        total: world.player.coins,
    });
}

fn enter_cave(world: &mut World, out_events: &mut Vec<Event>) {
    world.level_number = world.level_number.saturating_add(1);
    if world.level_number >= world.campaign.len() {
        world.raise(Transition::GameOver, out_events);
        return;
    }

    world.raise(Transition::NewLevel, out_events);
    let spawn = world.spawn;
    world.load_level(world.level_number, spawn, out_events);
}
