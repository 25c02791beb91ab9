//! Game configuration.
//!
//! `GameConfig` says how a game is set up: how many lives, how many
//! categories, which word pool, and which seed. Values come from
//! `Default`, the `with_*` builders, or the environment:
//!
//! | Variable                 | Meaning                                 |
//! |--------------------------|-----------------------------------------|
//! | `CONNECTIONS_SEED`       | `u64` seed for a reproducible board     |
//! | `CONNECTIONS_LIVES`      | mistakes allowed (>= 1)                 |
//! | `CONNECTIONS_CATEGORIES` | categories per game (>= 1)              |
//! | `CONNECTIONS_POOL`       | `builtin`, `classic`, or a JSON path    |
//! | `NO_COLOR`               | any value disables ANSI styling         |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::rng::GameRng;
use crate::categories::builtin::{classic_categories, default_pool};
use crate::categories::{Category, CategoryPool};

/// Lives a player starts with by default.
pub const DEFAULT_LIVES: u8 = 4;

/// Categories per game by default.
pub const DEFAULT_CATEGORIES: usize = 4;

/// Where a game's categories come from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolSource {
    /// The built-in themed pool, sampled per game.
    #[default]
    Builtin,
    /// The fixed four-category board.
    Classic,
    /// A JSON pool file.
    File(PathBuf),
}

impl PoolSource {
    /// Parse `builtin`, `classic`, or anything else as a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "builtin" | "" => PoolSource::Builtin,
            "classic" => PoolSource::Classic,
            path => PoolSource::File(PathBuf::from(path)),
        }
    }

    /// Produce `count` categories, using `rng` for any sampling.
    pub fn categories(&self, rng: &mut GameRng, count: usize) -> Result<Vec<Category>, SetupError> {
        match self {
            PoolSource::Builtin => default_pool().draw(rng, count),
            PoolSource::Classic => {
                let mut categories = classic_categories()?;
                if count > categories.len() {
                    return Err(SetupError::PoolTooSmall {
                        available: categories.len(),
                        requested: count,
                    });
                }
                categories.truncate(count);
                Ok(categories)
            }
            PoolSource::File(path) => CategoryPool::from_path(path)?.draw(rng, count),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Incorrect submissions allowed before the game is lost.
    pub lives: u8,

    /// Number of hidden categories on the board.
    pub categories_per_game: usize,

    /// Seed for category choice and board order.
    /// `None` means a fresh seed is drawn at startup.
    pub seed: Option<u64>,

    /// Category source.
    pub pool: PoolSource,

    /// Render with ANSI colors.
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            categories_per_game: DEFAULT_CATEGORIES,
            seed: None,
            pool: PoolSource::Builtin,
            color: true,
        }
    }
}

impl GameConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CONNECTIONS_SEED") {
            config.seed = Some(parse_setting("CONNECTIONS_SEED", &value)?);
        }
        if let Some(value) = lookup("CONNECTIONS_LIVES") {
            config.lives = parse_setting("CONNECTIONS_LIVES", &value)?;
        }
        if let Some(value) = lookup("CONNECTIONS_CATEGORIES") {
            config.categories_per_game = parse_setting("CONNECTIONS_CATEGORIES", &value)?;
        }
        if let Some(value) = lookup("CONNECTIONS_POOL") {
            config.pool = PoolSource::parse(&value);
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.lives == 0 {
            return Err(SetupError::InvalidSetting {
                key: "lives",
                value: self.lives.to_string(),
            });
        }
        if self.categories_per_game == 0 {
            return Err(SetupError::InvalidSetting {
                key: "categories_per_game",
                value: self.categories_per_game.to_string(),
            });
        }
        Ok(())
    }

    /// Set the starting lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u8) -> Self {
        self.lives = lives;
        self
    }

    /// Set the number of categories.
    #[must_use]
    pub fn with_categories(mut self, count: usize) -> Self {
        self.categories_per_game = count;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the category source.
    #[must_use]
    pub fn with_pool(mut self, pool: PoolSource) -> Self {
        self.pool = pool;
        self
    }

    /// Enable or disable colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

fn parse_setting<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, SetupError> {
    value.trim().parse().map_err(|_| SetupError::InvalidSetting {
        key,
        value: value.to_string(),
    })
}
