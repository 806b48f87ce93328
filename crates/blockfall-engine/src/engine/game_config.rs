use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, PieceSeed, Ruleset};

/// Settings fixed for the lifetime of a game.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change:
///
/// ```
/// use blockfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "arena_height": 24 }"#).unwrap();
/// assert_eq!(config.arena_width, 12);
/// assert_eq!(config.arena_height, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: usize,
    pub arena_height: usize,
    /// Gravity period in milliseconds.
    pub drop_interval_ms: u64,
    /// Points awarded per cleared row.
    pub score_per_row: usize,
    pub rules: Ruleset,
    /// Fixed piece sequence seed; random when absent.
    pub seed: Option<PieceSeed>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: Self::DEFAULT_ARENA_WIDTH,
            arena_height: Self::DEFAULT_ARENA_HEIGHT,
            drop_interval_ms: Self::DEFAULT_DROP_INTERVAL_MS,
            score_per_row: Self::DEFAULT_SCORE_PER_ROW,
            rules: Ruleset::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_ARENA_WIDTH: usize = 12;
    pub const DEFAULT_ARENA_HEIGHT: usize = 20;
    pub const DEFAULT_DROP_INTERVAL_MS: u64 = 1000;
    pub const DEFAULT_SCORE_PER_ROW: usize = 2;

    /// Smallest arena side that fits every piece (the I-piece is 4 cells long).
    pub const MIN_ARENA_SIDE: usize = 4;

    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width < Self::MIN_ARENA_SIDE || self.arena_height < Self::MIN_ARENA_SIDE {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                min: Self::MIN_ARENA_SIDE,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}
