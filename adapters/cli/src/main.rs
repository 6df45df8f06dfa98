#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Wild West game in a terminal.

mod config;
mod cutscene;
mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::GameConfig;
use input::Input;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;
use wild_west_core::Event;
use wild_west_rendering::{Presentation, RenderingBackend, Scene, TextBackend};
use wild_west_system_land_generation::LandGenerator;
use wild_west_system_progression::{self as progression, Progression};
use wild_west_world::{query, World};

const TITLE: &str = "Wild West";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line options accepted by the binary.
#[derive(Debug, Parser)]
#[command(name = "wild-west", about = "Tile-grid Wild West adventure")]
struct Cli {
    /// TOML file with game settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the wandering AI, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,
    /// Frames between two simulation ticks, overriding the config file.
    #[arg(long)]
    frames_per_tick: Option<u32>,
    /// Log filter directive such as `info` or `wild_west_world=debug`.
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Play the campaign, reading one key per input line.
    Play,
    /// Print a randomly generated land of walls and floor.
    GenerateLand {
        /// Width of the land.
        #[arg(long, default_value_t = 10)]
        columns: usize,
        /// Height of the land.
        #[arg(long, default_value_t = 10)]
        rows: usize,
        /// Seed for the generator.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Entry point for the Wild West command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let mut settings = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(frames_per_tick) = cli.frames_per_tick {
        settings.frames_per_tick = frames_per_tick;
    }
    debug!(?settings, "configuration resolved");

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => play(&settings),
        CliCommand::GenerateLand {
            columns,
            rows,
            seed,
        } => generate_land(columns, rows, seed.unwrap_or(settings.seed)),
    }
}

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level `{directive}`"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn play(settings: &GameConfig) -> Result<()> {
    let campaign = settings.load_campaign()?;
    let spawn = settings.spawn_position()?;
    info!(
        seed = settings.seed,
        frames_per_tick = settings.frames_per_tick,
        levels = campaign.len(),
        "starting game"
    );

    let mut events = Vec::new();
    let mut world = World::new(campaign, spawn, &mut events);
    log_events(&events);
    let mut progression = Progression::new(progression::Config::new(
        settings.frames_per_tick,
        settings.seed,
    ));
    let stdout = io::stdout();
    let mut backend = TextBackend::new(stdout.lock());

    let presentation = Presentation::new(TITLE, Scene::from_snapshot(&query::snapshot(&world))?);
    backend.announce(&presentation.title)?;
    backend.announce(query::welcome_banner(&world))?;
    for card in cutscene::INTRO {
        backend.announce(card)?;
    }
    backend.present(&presentation.scene)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read player input")?;
        let action = match input::interpret(&line) {
            Input::Quit => {
                info!("player quit");
                break;
            }
            Input::Act(action) => Some(action),
            Input::Idle => None,
        };

        events.clear();
        let transition = progression.step_frame(&mut world, action, &mut events);
        log_events(&events);
        if let Some(transition) = transition {
            for card in cutscene::cards_for(transition) {
                backend.announce(card)?;
            }
        }
        if progression.state().is_terminal() {
            break;
        }
        let _ = progression.resume();
        backend.present(&Scene::from_snapshot(&query::snapshot(&world))?)?;
    }

    info!(
        state = progression.state().as_str(),
        frames = backend.frames(),
        "game finished"
    );
    Ok(())
}

fn log_events(events: &[Event]) {
    for event in events {
        trace!(?event, "world event");
    }
}

fn generate_land(columns: usize, rows: usize, seed: u64) -> Result<()> {
    debug!(columns, rows, seed, "generating land");
    let land = LandGenerator::new(seed).generate(columns, rows);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(land.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write generated land")
}
