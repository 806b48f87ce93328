use std::path::PathBuf;

use anyhow::Context as _;
use blockfall_runtime::Runtime;
use tracing::info;

use self::app::PlayApp;
use super::config::GameConfigArg;
use crate::util;

mod app;
mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameConfigArg,
    /// Hide the dotted grid drawn on empty cells
    #[clap(long)]
    no_grid: bool,
    /// Write log output to this file (filtered by RUST_LOG, default "info")
    #[clap(long)]
    log_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        game,
        no_grid,
        log_file,
    } = arg;

    util::init_logging(log_file.as_deref())?;
    let config = game.load()?;
    info!(?config, "starting game");

    let mut app = PlayApp::new(&config, !*no_grid);
    Runtime::new()
        .run(&mut app)
        .context("Terminal I/O failed")?;

    info!(score = app.score(), "game finished");
    Ok(())
}
