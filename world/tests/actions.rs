use wild_west_core::{Action, Command, Direction, Event, Position, Transition, COIN_VALUE};
use wild_west_world::{self as world, query, Campaign, World};

const OPEN: &str = "..........";

fn at(x: u32, y: u32) -> Position {
    Position::new(x, y).expect("valid position")
}

fn level_with(overrides: &[(u32, u32, char)]) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = vec![OPEN.chars().collect(); 10];
    for &(x, y, symbol) in overrides {
        rows[y as usize][x as usize] = symbol;
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn world_with(levels: Vec<Vec<String>>, spawn: Position) -> World {
    let campaign = Campaign::from_rows(levels).expect("valid campaign");
    World::new(campaign, spawn, &mut Vec::new())
}

fn act(world: &mut World, action: Action) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, Command::PerformAction { action }, &mut events);
    events
}

#[test]
fn wall_blocks_player_step() {
    let mut world = world_with(vec![level_with(&[(6, 5, '#')])], at(5, 5));

    let events = act(&mut world, Action::Move(Direction::Right));

    let player = query::player(&world);
    assert_eq!(player.position, at(5, 5));
    assert_eq!(player.last_direction, Direction::Right);
    assert!(events.is_empty());
}

#[test]
fn stepping_onto_coin_collects_it() {
    let mut world = world_with(vec![level_with(&[(2, 5, '$'), (7, 7, '$')])], at(1, 5));
    assert_eq!(query::player(&world).coins, 0);

    let events = act(&mut world, Action::Move(Direction::Right));

    let player = query::player(&world);
    assert_eq!(player.position, at(2, 5));
    assert_eq!(player.coins, COIN_VALUE);
    assert_eq!(query::coins(&world).len(), 1);
    assert!(query::coins(&world)
        .iter()
        .all(|coin| coin.position != at(2, 5)));
    assert_eq!(
        events,
        vec![
            Event::PlayerMoved {
                from: at(1, 5),
                to: at(2, 5),
            },
            Event::CoinCollected {
                at: at(2, 5),
                value: COIN_VALUE,
                total: COIN_VALUE,
            },
        ]
    );

    let _ = act(&mut world, Action::Move(Direction::Left));
    let _ = act(&mut world, Action::Move(Direction::Right));
    assert_eq!(query::player(&world).coins, COIN_VALUE);
}

#[test]
fn cave_entrance_loads_next_level() {
    let first = level_with(&[(5, 8, 'X'), (0, 0, '$'), (9, 9, 'E')]);
    let second = level_with(&[(1, 1, '#'), (2, 2, '#'), (3, 3, 'R')]);
    let mut world = world_with(vec![first, second], at(4, 8));

    let _ = act(&mut world, Action::Move(Direction::Up));
    let _ = act(&mut world, Action::Shoot);
    let _ = act(&mut world, Action::Move(Direction::Down));
    assert_eq!(query::bullets(&world).len(), 1);

    let events = act(&mut world, Action::Move(Direction::Right));

    assert_eq!(query::transition(&world), Transition::NewLevel);
    assert_eq!(query::level_number(&world), 1);
    assert_eq!(query::player(&world).position, at(4, 8));
    assert_eq!(query::walls(&world), &[at(1, 1), at(2, 2)]);
    assert!(query::coins(&world).is_empty());
    assert!(query::bullets(&world).is_empty());
    assert!(query::enemy_view(&world).into_vec().is_empty());
    assert_eq!(query::rider_view(&world).into_vec().len(), 1);
    assert!(events.contains(&Event::TransitionRaised {
        transition: Transition::NewLevel,
    }));
    assert!(events.contains(&Event::LevelLoaded {
        level: 1,
        spawn: at(4, 8),
    }));
}

#[test]
fn cave_entrance_on_last_level_ends_campaign() {
    let mut world = world_with(vec![level_with(&[(5, 8, 'X'), (0, 0, '$')])], at(4, 8));

    let _ = act(&mut world, Action::Move(Direction::Right));

    assert_eq!(query::transition(&world), Transition::GameOver);
    assert_eq!(query::level_number(&world), query::level_count(&world));
    assert_eq!(query::player(&world).position, at(5, 8));
    assert_eq!(query::coins(&world).len(), 1);
}

#[test]
fn trap_kills_player() {
    let mut world = world_with(vec![level_with(&[(4, 7, 'T')])], at(4, 8));

    let _ = act(&mut world, Action::Move(Direction::Up));

    assert_eq!(query::transition(&world), Transition::YouDied);
}

#[test]
fn rider_contact_kills_player() {
    let mut world = world_with(vec![level_with(&[(3, 8, 'R')])], at(4, 8));

    let _ = act(&mut world, Action::Move(Direction::Left));

    assert_eq!(query::transition(&world), Transition::YouDied);
    assert_eq!(query::player(&world).position, at(3, 8));
}

#[test]
fn later_checks_observe_freshly_loaded_level() {
    let first = level_with(&[(5, 8, 'X')]);
    let second = level_with(&[(4, 8, 'T')]);
    let mut world = world_with(vec![first, second], at(4, 8));

    let events = act(&mut world, Action::Move(Direction::Right));

    assert_eq!(query::transition(&world), Transition::YouDied);
    let raised: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::TransitionRaised { transition } => Some(*transition),
            _ => None,
        })
        .collect();
    assert_eq!(raised, vec![Transition::NewLevel, Transition::YouDied]);
}

#[test]
fn transition_is_consumed_once() {
    let mut world = world_with(vec![level_with(&[(4, 7, 'T')])], at(4, 8));
    let _ = act(&mut world, Action::Move(Direction::Up));

    let mut events = Vec::new();
    world::apply(&mut world, Command::AcknowledgeTransition, &mut events);
    world::apply(&mut world, Command::AcknowledgeTransition, &mut events);

    assert_eq!(query::transition(&world), Transition::None);
    assert_eq!(
        events,
        vec![Event::TransitionCleared {
            transition: Transition::YouDied,
        }]
    );
}

#[test]
fn jump_leaps_over_walls() {
    let mut world = world_with(vec![level_with(&[(3, 4, '#')])], at(2, 4));

    let _ = act(&mut world, Action::Jump);

    assert_eq!(query::player(&world).position, at(4, 4));
}

#[test]
fn jump_onto_wall_is_rolled_back() {
    let mut world = world_with(vec![level_with(&[(4, 4, '#')])], at(2, 4));

    let events = act(&mut world, Action::Jump);

    assert_eq!(query::player(&world).position, at(2, 4));
    assert!(events.is_empty());
}

#[test]
fn jump_off_the_grid_is_rejected() {
    let mut world = world_with(vec![level_with(&[])], at(8, 4));

    let events = act(&mut world, Action::Jump);

    assert_eq!(query::player(&world).position, at(8, 4));
    assert_eq!(events, vec![Event::JumpRejected { from: at(8, 4) }]);
}

#[test]
fn jump_collects_coin_at_landing() {
    let mut world = world_with(vec![level_with(&[(5, 4, '$')])], at(3, 4));

    let _ = act(&mut world, Action::Jump);

    assert_eq!(query::player(&world).coins, COIN_VALUE);
}

#[test]
fn shooting_follows_last_direction() {
    let mut world = world_with(vec![level_with(&[])], at(4, 4));

    let _ = act(&mut world, Action::Move(Direction::Left));
    let events = act(&mut world, Action::Shoot);

    let bullets = query::bullets(&world);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].position, at(3, 4));
    assert_eq!(bullets[0].direction, Direction::Left);
    assert_eq!(query::player(&world).position, at(3, 4));
    assert!(query::enemy_bullets(&world).is_empty());
    assert_eq!(
        events,
        vec![Event::BulletFired {
            at: at(3, 4),
            direction: Direction::Left,
        }]
    );
}

#[test]
fn down_from_bottom_row_wraps_to_top() {
    let mut world = world_with(vec![level_with(&[])], at(6, 9));

    let _ = act(&mut world, Action::Move(Direction::Down));

    assert_eq!(query::player(&world).position, at(6, 0));
}
