// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fourth_down_pages::{GenOptions, Variant};
use tempfile::TempDir;

pub const PLAYS_CSV: &str = "\
play_id,season,week,game_id,home_team,away_team,down,ydstogo
1,2022,1,2022_01_PHI_DET,DET,PHI,4,1
2,2022,1,2022_01_PHI_DET,DET,PHI,4,3
3,2022,2,2022_02_MIN_PHI,PHI,MIN,4,2
4,2023,1,2023_01_PHI_NE,NE,PHI,4,1
5,,1,2021_01_PHI_ATL,ATL,PHI,4,1
6,2021,,2021_01_PHI_ATL,ATL,PHI,4,1
7,2021,1,,ATL,PHI,4,1
";

pub const INDEX_JSON: &str = r#"[
  {"season": 2023, "games": [
    {"game_id": "2023_W1_PHI_NE", "week": 1, "date": "2023-09-10",
     "home": "PHI", "away": "NE", "final": {"home": 25, "away": 20}, "pbp_url": "http://x"},
    {"game_id": "2023_W2_PHI_MIN", "week": 2, "home": "PHI", "away": "MIN"}
  ]},
  {"season": 2024, "games": [
    {"game_id": "2024_W1_PHI_GB", "week": 1, "home": "GB", "away": "PHI",
     "final": [{"home": 29, "away": 34}]}
  ]}
]"#;

/// Temp workspace with an input file and both output dirs under it.
pub struct Site {
    _tmp: TempDir,
    pub root: PathBuf,
    pub opts: GenOptions,
}

impl Site {
    pub fn new(variant: Variant, input_name: &str, input: &str) -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().to_path_buf();
        let input_path = root.join("_data").join(input_name);
        fs::create_dir_all(input_path.parent().unwrap()).expect("create _data");
        fs::write(&input_path, input).expect("write input");

        let mut opts = GenOptions::rooted_at(variant, &root);
        opts.set_input(input_path);
        Self { _tmp: tmp, root, opts }
    }

    pub fn plays(variant: Variant) -> Self {
        Self::new(variant, "plays.csv", PLAYS_CSV)
    }

    pub fn index() -> Self {
        Self::new(Variant::Index, "games_index.json", INDEX_JSON)
    }

    pub fn rewrite_input(&self, contents: &str) {
        fs::write(self.opts.input(), contents).expect("rewrite input");
    }

    pub fn seasons(&self) -> BTreeMap<String, String> {
        snapshot(&self.opts.seasons_dir)
    }

    pub fn games(&self) -> BTreeMap<String, String> {
        snapshot(&self.opts.games_dir)
    }
}

/// file name → contents, for every file directly inside `dir`.
pub fn snapshot(dir: &Path) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_file() {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            out.insert(name, fs::read_to_string(&path).expect("read page"));
        }
    }
    out
}

pub fn names(map: &BTreeMap<String, String>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}
