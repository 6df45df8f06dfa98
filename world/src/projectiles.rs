//! Per-tick projectile motion, hit detection and enemy fire.

use tracing::{debug, trace};
use wild_west_core::{
    resolve_move, Bullet, BulletOwner, Event, OccupancySet, Position, ENEMY_SHOT_INTERVAL,
};

use crate::{Enemy, World};

pub(crate) fn advance(world: &mut World, out_events: &mut Vec<Event>) {
    world.tick_index = world.tick_index.saturating_add(1);
    out_events.push(Event::TimeAdvanced {
        tick: world.tick_index,
    });

    let blockers = world.projectile_blockers();

    let bullets = std::mem::take(&mut world.bullets);
    let enemies = &mut world.enemies;
    world.bullets = fly(bullets, &blockers, BulletOwner::Player, out_events, |at, out| {
        strike_enemies(enemies, at, out);
    });

    let enemy_bullets = std::mem::take(&mut world.enemy_bullets);
    let player = &mut world.player;
    world.enemy_bullets = fly(enemy_bullets, &blockers, BulletOwner::Enemy, out_events, |at, out| {
        if player.position == at {
            player.health -= 1;
            debug!(health = player.health, "player hit");
            out.push(Event::PlayerHit {
                health: player.health,
            });
        }
    });

    fire_enemy_bullets(world, out_events);
}

/// Moves every bullet one step, dropping the ones that could not move and
/// reporting each new cell to `on_arrival`.
fn fly<F>(
    bullets: Vec<Bullet>,
    blockers: &OccupancySet,
    owner: BulletOwner,
    out_events: &mut Vec<Event>,
    mut on_arrival: F,
) -> Vec<Bullet>
where
    F: FnMut(Position, &mut Vec<Event>),
{
    let mut survivors = Vec::with_capacity(bullets.len());
    for mut bullet in bullets {
        let next = resolve_move(bullet.position, bullet.direction, blockers);
        if next == bullet.position {
            trace!(?owner, x = next.x(), y = next.y(), "bullet despawned");
            out_events.push(Event::BulletDespawned { at: next, owner });
            continue;
        }

        bullet.position = next;
        on_arrival(next, out_events);
        survivors.push(bullet);
    }
    survivors
}

fn strike_enemies(enemies: &mut Vec<Enemy>, at: Position, out_events: &mut Vec<Event>) {
    let mut struck = false;
    for enemy in enemies.iter_mut().filter(|enemy| enemy.position == at) {
        enemy.health -= 1;
        struck = true;
        out_events.push(Event::EnemyHit {
            enemy: enemy.id,
            health: enemy.health,
        });
    }

    if !struck {
        return;
    }

    enemies.retain(|enemy| {
        if enemy.health > 0 {
            return true;
        }
        debug!(enemy = enemy.id.get(), "enemy defeated");
        out_events.push(Event::EnemyDefeated {
            enemy: enemy.id,
            at: enemy.position,
        });
        false
    });
}

fn fire_enemy_bullets(world: &mut World, out_events: &mut Vec<Event>) {
    for enemy in &mut world.enemies {
        enemy.shoot_counter += 1;
        if enemy.shoot_counter < ENEMY_SHOT_INTERVAL {
            continue;
        }

        enemy.shoot_counter = 0;
        world.enemy_bullets.push(Bullet {
            position: enemy.position,
            direction: enemy.last_direction,
        });
        out_events.push(Event::EnemyFired {
            enemy: enemy.id,
            at: enemy.position,
            direction: enemy.last_direction,
        });
    }
}
