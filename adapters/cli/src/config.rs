use std::{fs, ops::RangeInclusive, path::Path};

use anyhow::{bail, Context, Result};
use bridge_crossing_rendering::MapLayout;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_MIN_SIZE: usize = 3;
const DEFAULT_MAX_SIZE: usize = 20;

/// Game settings read from an optional TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    /// Smallest bridge length the player may ask for.
    pub(crate) min_size: usize,
    /// Largest bridge length the player may ask for.
    pub(crate) max_size: usize,
    /// Seed for a reproducible bridge; entropy is used when absent.
    pub(crate) seed: Option<u64>,
    /// Whether the final map shows every attempt or only the last one.
    pub(crate) show_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            seed: None,
            show_history: true,
        }
    }
}

impl GameConfig {
    /// Reads and validates the configuration stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("failed to parse config toml")?;
        if config.min_size == 0 {
            bail!("min_size must be positive");
        }
        if config.min_size > config.max_size {
            bail!(
                "min_size {} exceeds max_size {}",
                config.min_size,
                config.max_size
            );
        }
        Ok(config)
    }

    /// Bridge lengths accepted from the player.
    pub(crate) fn size_bounds(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    /// Portion of the map printed with the final result.
    pub(crate) fn layout(&self) -> MapLayout {
        if self.show_history {
            MapLayout::History
        } else {
            MapLayout::Latest
        }
    }
}
