// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

/// Which data-source adapter and front-matter schema a run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    /// Delimited play table, game pages titled by game id only.
    Ids,
    /// Delimited play table, game pages titled "away at home".
    Matchup,
    /// JSON season/game index with dates, final scores and source links.
    Index,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Ids => "ids",
            Variant::Matchup => "matchup",
            Variant::Index => "index",
        }
    }

    pub fn is_tabular(&self) -> bool {
        !matches!(self, Variant::Index)
    }

    pub fn default_input(&self) -> &'static str {
        match self {
            Variant::Ids => DEFAULT_IDS_TABLE_PATH,
            Variant::Matchup => DEFAULT_TABLE_PATH,
            Variant::Index => DEFAULT_INDEX_PATH,
        }
    }
}

/// What to do when two distinct game ids encode to the same slug.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CollisionPolicy {
    /// Last writer wins; a warning is logged.
    #[default]
    Overwrite,
    /// Later ids get "-2", "-3", ... appended to the slug.
    Suffix,
    /// Abort the run.
    Error,
}

/// Everything a generation run needs. No stage reads global paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenOptions {
    pub variant: Variant,
    input: Option<PathBuf>,
    pub seasons_dir: PathBuf,
    pub games_dir: PathBuf,
    ext: String,
    pub delimiter: char,
    pub season_title: Option<String>,
    pub on_collision: CollisionPolicy,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self::for_variant(Variant::Matchup)
    }
}

impl GenOptions {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            input: None,
            seasons_dir: PathBuf::from(DEFAULT_SEASONS_DIR),
            games_dir: PathBuf::from(DEFAULT_GAMES_DIR),
            ext: s!(DEFAULT_EXT),
            delimiter: DEFAULT_DELIM,
            season_title: None,
            on_collision: CollisionPolicy::default(),
        }
    }

    /// Both output directories placed under `root`.
    pub fn rooted_at(variant: Variant, root: &Path) -> Self {
        let mut opts = Self::for_variant(variant);
        opts.seasons_dir = root.join(DEFAULT_SEASONS_DIR);
        opts.games_dir = root.join(DEFAULT_GAMES_DIR);
        opts
    }

    /// Explicit input path, else the variant's conventional location.
    pub fn input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.variant.default_input()))
    }

    pub fn set_input(&mut self, path: impl Into<PathBuf>) {
        self.input = Some(path.into());
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Accepts "md" or ".md".
    pub fn set_ext(&mut self, ext: &str) {
        self.ext = s!(ext.trim().trim_start_matches('.'));
    }

    pub fn season_file(&self, season: i64) -> PathBuf {
        self.seasons_dir.join(join!(&season.to_string(), ".", &self.ext))
    }

    pub fn game_file(&self, slug: &str) -> PathBuf {
        self.games_dir.join(join!(slug, ".", &self.ext))
    }
}
