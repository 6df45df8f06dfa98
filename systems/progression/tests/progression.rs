use wild_west_core::{Action, Direction, Event, Position, Transition};
use wild_west_system_progression::{Config, GameState, Progression};
use wild_west_world::{query, Campaign, World};

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

fn world_with(levels: Vec<Vec<String>>) -> World {
    let campaign = Campaign::from_rows(levels).expect("valid campaign");
    World::new(campaign, at(4, 8), &mut Vec::new())
}

#[test]
fn ticks_run_every_configured_frame_count() {
    let mut world = world_with(vec![level_with(&[])]);
    let mut progression = Progression::new(Config::new(3, 1));
    let mut events = Vec::new();

    for frame in 1..=9_u64 {
        let _ = progression.step_frame(&mut world, None, &mut events);
        assert_eq!(query::tick_index(&world), frame / 3, "frame {frame}");
    }
    assert_eq!(progression.frames_until_tick(), 3);
}

#[test]
fn tick_runs_before_frame_input() {
    let mut world = world_with(vec![level_with(&[])]);
    let mut progression = Progression::new(Config::new(1, 1));
    let mut events = Vec::new();

    let _ = progression.step_frame(&mut world, Some(Action::Shoot), &mut events);

    let bullets = query::bullets(&world);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].position, at(4, 8));
    let tick = events
        .iter()
        .position(|event| matches!(event, Event::TimeAdvanced { .. }));
    let shot = events
        .iter()
        .position(|event| matches!(event, Event::BulletFired { .. }));
    assert!(tick.is_some() && tick < shot);
}

#[test]
fn cave_entrance_pauses_until_resumed() {
    let first = level_with(&[(5, 8, 'X')]);
    let second = level_with(&[(0, 0, '#')]);
    let mut world = world_with(vec![first, second]);
    let mut progression = Progression::new(Config::new(100, 1));
    let mut events = Vec::new();

    let transition = progression.apply_action(
        &mut world,
        Action::Move(Direction::Right),
        &mut events,
    );

    assert_eq!(transition, Some(Transition::NewLevel));
    assert_eq!(progression.state(), GameState::LevelTransition);
    assert_eq!(query::transition(&world), Transition::None);
    assert_eq!(query::level_number(&world), 1);

    let ignored = progression.step_frame(
        &mut world,
        Some(Action::Move(Direction::Up)),
        &mut events,
    );
    assert_eq!(ignored, None);
    assert_eq!(query::player(&world).position, at(4, 8));

    assert!(progression.resume());
    let _ = progression.step_frame(
        &mut world,
        Some(Action::Move(Direction::Up)),
        &mut events,
    );
    assert_eq!(query::player(&world).position, at(4, 7));
}

#[test]
fn trap_ends_the_game() {
    let mut world = world_with(vec![level_with(&[(4, 7, 'T')])]);
    let mut progression = Progression::new(Config::new(1, 1));
    let mut events = Vec::new();

    let transition = progression.step_frame(
        &mut world,
        Some(Action::Move(Direction::Up)),
        &mut events,
    );
    assert_eq!(transition, Some(Transition::YouDied));
    assert_eq!(progression.state(), GameState::Dead);

    let ticks = query::tick_index(&world);
    for _ in 0..5 {
        let _ = progression.step_frame(&mut world, Some(Action::Shoot), &mut events);
    }
    assert_eq!(query::tick_index(&world), ticks);
    assert!(query::bullets(&world).is_empty());
    assert!(!progression.resume());
}

#[test]
fn final_cave_completes_the_campaign() {
    let mut world = world_with(vec![level_with(&[(3, 8, 'X')])]);
    let mut progression = Progression::new(Config::default());
    let mut events = Vec::new();

    let transition = progression.apply_action(
        &mut world,
        Action::Move(Direction::Left),
        &mut events,
    );

    assert_eq!(transition, Some(Transition::GameOver));
    assert_eq!(progression.state(), GameState::Completed);
    assert!(progression.state().is_terminal());
    assert!(events.contains(&Event::TransitionCleared {
        transition: Transition::GameOver,
    }));
}

#[test]
fn transition_is_reported_once() {
    let mut world = world_with(vec![level_with(&[(4, 7, 'T')])]);
    let mut progression = Progression::new(Config::default());
    let mut events = Vec::new();

    let first = progression.apply_action(&mut world, Action::Move(Direction::Up), &mut events);
    let cleared = events
        .iter()
        .filter(|event| matches!(event, Event::TransitionCleared { .. }))
        .count();

    assert_eq!(first, Some(Transition::YouDied));
    assert_eq!(cleared, 1);
    assert_eq!(query::transition(&world), Transition::None);
}
