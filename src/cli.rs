// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{CollisionPolicy, GenOptions, Variant};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Every argument is optional: a bare invocation rebuilds `seasons/` and
/// `games/` from the variant's conventional input under `_data/`.
#[derive(Parser, Debug)]
#[command(
    name = "fourth_down_pages",
    version,
    about = "Generate season and game pages (front matter only) for a static site"
)]
pub struct Cli {
    #[arg(long, value_enum, env = "FDP_VARIANT", default_value_t = Variant::Matchup)]
    pub variant: Variant,

    #[arg(short, long, env = "FDP_INPUT", help = "Dataset path (default depends on variant)")]
    pub input: Option<PathBuf>,

    #[arg(long, env = "FDP_SEASONS_DIR", default_value = crate::config::consts::DEFAULT_SEASONS_DIR)]
    pub seasons_dir: PathBuf,

    #[arg(long, env = "FDP_GAMES_DIR", default_value = crate::config::consts::DEFAULT_GAMES_DIR)]
    pub games_dir: PathBuf,

    #[arg(long, env = "FDP_EXT", default_value = crate::config::consts::DEFAULT_EXT)]
    pub ext: String,

    #[arg(long, env = "FDP_SEASON_TITLE", help = "Season title template; {season} is replaced")]
    pub season_title: Option<String>,

    #[arg(long, value_enum, env = "FDP_ON_COLLISION", default_value_t = CollisionPolicy::Overwrite)]
    pub on_collision: CollisionPolicy,

    #[arg(long, env = "FDP_DELIMITER", default_value_t = ',', help = "Field separator for tabular input")]
    pub delimiter: char,
}

impl Cli {
    pub fn into_options(self) -> GenOptions {
        let mut opts = GenOptions::for_variant(self.variant);
        if let Some(input) = self.input {
            opts.set_input(input);
        }
        opts.seasons_dir = self.seasons_dir;
        opts.games_dir = self.games_dir;
        opts.set_ext(&self.ext);
        opts.season_title = self.season_title;
        opts.on_collision = self.on_collision;
        opts.delimiter = self.delimiter;
        opts
    }
}

/// Prints one line per phase; per-file detail goes to the debug log.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, phase: &str, total: usize) {
        logf!("writing {total} {phase} page(s)");
    }
    fn item_done(&mut self, path: &Path) {
        logd!("wrote {}", path.display());
    }
}

pub fn run() -> Result<RunSummary> {
    let opts = Cli::parse().into_options();
    let summary = runner::run(&opts, Some(&mut CliProgress))?;
    println!(
        "Pages generated in {} and {}",
        opts.seasons_dir.display(),
        opts.games_dir.display()
    );
    Ok(summary)
}
