//! Game configuration loaded from TOML files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use wild_west_core::{LevelMap, Position};
use wild_west_system_progression::DEFAULT_FRAMES_PER_TICK;
use wild_west_world::{Campaign, DEFAULT_SPAWN};

/// Settings controlling a play session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) frames_per_tick: u32,
    pub(crate) seed: u64,
    pub(crate) spawn: SpawnConfig,
    pub(crate) campaign: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frames_per_tick: DEFAULT_FRAMES_PER_TICK,
            seed: 0,
            spawn: SpawnConfig::default(),
            campaign: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SpawnConfig {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let (x, y) = DEFAULT_SPAWN;
        Self { x, y }
    }
}

impl GameConfig {
    /// Reads a configuration file. A relative campaign path is resolved
    /// against the directory holding the configuration.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read game config at {}", path.display()))?;
        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("invalid game config at {}", path.display()))?;

        if let Some(campaign) = config.campaign.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.campaign = Some(base.join(campaign));
        }
        Ok(config)
    }

    pub(crate) fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse game config toml contents")
    }

    pub(crate) fn spawn_position(&self) -> Result<Position> {
        Position::new(self.spawn.x, self.spawn.y).context("spawn must lie on the grid")
    }

    /// Campaign named by the configuration, or the built-in one.
    pub(crate) fn load_campaign(&self) -> Result<Campaign> {
        let Some(path) = &self.campaign else {
            return Campaign::builtin().context("built-in campaign is invalid");
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read campaign at {}", path.display()))?;
        parse_campaign(&contents)
            .with_context(|| format!("invalid campaign at {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CampaignManifest {
    levels: Vec<LevelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelEntry {
    rows: LevelMap,
}

fn parse_campaign(contents: &str) -> Result<Campaign> {
    let manifest: CampaignManifest =
        toml::from_str(contents).context("failed to parse campaign toml contents")?;
    let levels = manifest.levels.into_iter().map(|entry| entry.rows).collect();
    Campaign::new(levels).context("campaign must contain at least one level")
}
