use wild_west_core::{Command, Position};
use wild_west_system_wandering::{Config, Wandering};
use wild_west_world::{self as world, query, Campaign, World};

fn crowded_world() -> World {
    let campaign = Campaign::from_rows([[
        "##########",
        "#R......E#",
        "#........#",
        "#...R....#",
        "#........#",
        "#....E...#",
        "#........#",
        "#........#",
        "#........#",
        "##########",
    ]])
    .expect("valid campaign");
    World::new(
        campaign,
        Position::new(4, 8).expect("valid spawn"),
        &mut Vec::new(),
    )
}

fn proposals(seed: u64, rounds: usize) -> Vec<Command> {
    let world = crowded_world();
    let mut wandering = Wandering::new(Config::new(seed));
    let mut out = Vec::new();
    for _ in 0..rounds {
        wandering.handle(&query::rider_view(&world), &query::enemy_view(&world), &mut out);
    }
    out
}

#[test]
fn same_seed_proposes_same_steps() {
    assert_eq!(proposals(11, 50), proposals(11, 50));
}

#[test]
fn every_enemy_attempts_a_step_each_round() {
    let world = crowded_world();
    let mut wandering = Wandering::new(Config::new(5));

    for _ in 0..20 {
        let mut out = Vec::new();
        wandering.handle(&query::rider_view(&world), &query::enemy_view(&world), &mut out);
        let enemy_steps = out
            .iter()
            .filter(|command| matches!(command, Command::StepEnemy { .. }))
            .count();
        assert_eq!(enemy_steps, 2);
        let first_enemy = out
            .iter()
            .position(|command| matches!(command, Command::StepEnemy { .. }))
            .unwrap_or(out.len());
        assert!(
            out[first_enemy..]
                .iter()
                .all(|command| matches!(command, Command::StepEnemy { .. })),
            "rider steps must precede enemy steps"
        );
    }
}

#[test]
fn riders_wait_about_half_the_time() {
    let rounds = 1_000;
    let rider_steps = proposals(29, rounds)
        .iter()
        .filter(|command| matches!(command, Command::StepRider { .. }))
        .count();

    let attempts = rounds * 2;
    assert!(
        rider_steps > attempts * 2 / 5 && rider_steps < attempts * 3 / 5,
        "riders stepped {rider_steps} times out of {attempts}"
    );
}

#[test]
fn proposals_keep_entities_inside_walls() {
    let mut world = crowded_world();
    let mut wandering = Wandering::new(Config::new(17));

    for _ in 0..200 {
        let mut commands = Vec::new();
        wandering.handle(
            &query::rider_view(&world),
            &query::enemy_view(&world),
            &mut commands,
        );
        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }
    }

    let walls = query::walls(&world);
    for rider in query::rider_view(&world).iter() {
        assert!(!walls.contains(&rider.position));
    }
    for enemy in query::enemy_view(&world).iter() {
        assert!(!walls.contains(&enemy.position));
    }
}
