use std::{io, path::PathBuf};

use anyhow::Context as _;
use blockfall_engine::{GameConfig, PieceSeed};

use crate::util;

/// Game settings taken from an optional JSON file, then overridden by flags.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameConfigArg {
    /// JSON file with game settings (missing keys keep their defaults)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Arena width in cells
    #[clap(long)]
    width: Option<usize>,
    /// Arena height in cells
    #[clap(long)]
    height: Option<usize>,
    /// Gravity period in milliseconds
    #[clap(long)]
    drop_interval_ms: Option<u64>,
    /// Piece sequence seed (32 hex digits)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Treat the side walls as solid
    #[clap(long)]
    walls: bool,
    /// Allow the topmost row to be cleared
    #[clap(long)]
    clear_top_row: bool,
}

impl GameConfigArg {
    pub(crate) fn load(&self) -> anyhow::Result<GameConfig> {
        let base = match &self.config {
            Some(path) => util::read_json_file("game config", path)?,
            None => GameConfig::default(),
        };
        let config = self.apply(base);
        config.validate().context("Invalid game config")?;
        Ok(config)
    }

    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(width) = self.width {
            config.arena_width = width;
        }
        if let Some(height) = self.height {
            config.arena_height = height;
        }
        if let Some(interval) = self.drop_interval_ms {
            config.drop_interval_ms = interval;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.rules.wall_collision |= self.walls;
        config.rules.clear_top_row |= self.clear_top_row;
        config
    }
}

pub(crate) fn show(arg: &GameConfigArg) -> anyhow::Result<()> {
    let config = arg.load()?;
    let mut stdout = io::stdout().lock();
    util::write_json_pretty(&mut stdout, &config)
}
