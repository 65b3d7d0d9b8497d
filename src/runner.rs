// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::GenOptions,
    error::Result,
    file::reset_output_dir,
    pages::{emit_games, emit_seasons},
    progress::Progress,
    sources,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub season_files: Vec<PathBuf>,
    pub game_files: Vec<PathBuf>,
    /// Stale pages removed before writing.
    pub cleared: usize,
    /// Input rows the cleaner discarded.
    pub dropped: usize,
}

/// Full rebuild: load → clean → reset both dirs → seasons → games.
///
/// The dataset is loaded and cleaned before either output directory is
/// touched, so a bad input leaves the previous pages in place.
/// `progress` can be None or Some(&mut impl Progress).
pub fn run(
    opts: &GenOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let input = opts.input();
    logf!("loading {} ({} variant)", input.display(), opts.variant.name());

    let ds = sources::for_options(opts).load()?;

    let cleared = reset_output_dir(&opts.seasons_dir, opts.ext())?
        + reset_output_dir(&opts.games_dir, opts.ext())?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin("seasons", ds.seasons.len());
    }
    let season_files = emit_seasons(opts, &ds, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin("games", ds.games().len());
    }
    let game_files = emit_games(opts, &ds, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "wrote {} season page(s) and {} game page(s); {} stale page(s) removed",
        season_files.len(),
        game_files.len(),
        cleared
    );

    Ok(RunSummary { season_files, game_files, cleared, dropped: ds.dropped })
}
