// src/config/consts.rs

// Input datasets, relative to the working directory
pub const DEFAULT_TABLE_PATH: &str = "_data/eagles_4th_downs_all_time.csv";
// The ids pages were built from the per-year export one level up
pub const DEFAULT_IDS_TABLE_PATH: &str = "../data/eagles_4th_downs_all_years.csv";
pub const DEFAULT_INDEX_PATH: &str = "_data/games_index.json";
pub const DEFAULT_DELIM: char = ',';

// Output
pub const DEFAULT_SEASONS_DIR: &str = "seasons";
pub const DEFAULT_GAMES_DIR: &str = "games";
pub const DEFAULT_EXT: &str = "md";

// Front matter
pub const FRONT_MATTER_FENCE: &str = "---";
pub const SEASON_LAYOUT: &str = "season";
pub const GAME_LAYOUT: &str = "game";
pub const TABLE_SEASON_TITLE_SUFFIX: &str = "Eagles 4th Downs";
