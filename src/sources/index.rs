// src/sources/index.rs
//
// Game index: a JSON array of season blocks.
//
//   [{"season": 2023, "games": [{"game_id", "week", "date", "home",
//                                "away", "final", "pbp_url"}, ...]}, ...]
//
// `season`, `game_id` and `week` are the data contract; a block or game
// without them fails the load. Everything else falls back to empty, and
// scalar values of any JSON type are written as their text.
//
// A game listed twice under the same (season, week, game_id) keeps the
// later entry.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use super::{read_text, RecordSource};
use crate::error::{GenError, Result};
use crate::model::{Dataset, FinalScore, Record};

#[derive(Debug, Deserialize)]
struct SeasonBlock {
    season: i64,
    #[serde(default)]
    games: Vec<GameEntry>,
}

#[derive(Debug, Deserialize)]
struct GameEntry {
    game_id: String,
    week: i64,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    home: Option<Value>,
    #[serde(default)]
    away: Option<Value>,
    #[serde(default, rename = "final")]
    final_score: Option<Value>,
    #[serde(default)]
    pbp_url: Option<Value>,
}

pub struct IndexSource {
    path: PathBuf,
}

impl IndexSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for IndexSource {
    fn load(&self) -> Result<Dataset> {
        let text = read_text(&self.path)?;
        let blocks: Vec<SeasonBlock> = serde_json::from_str(&text)
            .map_err(|source| GenError::Json { path: self.path.clone(), source })?;

        let ds = flatten(blocks);
        logd!("{}: {} seasons, {} games", self.path.display(), ds.seasons.len(), ds.records.len());
        Ok(ds)
    }
}

// Every block's season gets a page, even one with no games.
fn flatten(blocks: Vec<SeasonBlock>) -> Dataset {
    let mut ds = Dataset::default();
    let mut slot: HashMap<(i64, i64, String), usize> = HashMap::new();
    for block in blocks {
        ds.seasons.insert(block.season);
        for g in block.games {
            let rec = Record {
                season: block.season,
                week: g.week,
                home_team: scalar_text(g.home.as_ref()),
                away_team: scalar_text(g.away.as_ref()),
                date: scalar_text(g.date.as_ref()),
                final_score: parse_final(g.final_score.as_ref()),
                pbp_url: scalar_text(g.pbp_url.as_ref()),
                game_id: g.game_id,
            };
            let key = (rec.season, rec.week, rec.game_id.clone());
            match slot.get(&key) {
                Some(&i) => {
                    logd!(
                        "game {} listed twice in season {} week {}, keeping the later entry",
                        rec.game_id, rec.season, rec.week
                    );
                    ds.records[i] = rec;
                }
                None => {
                    slot.insert(key, ds.records.len());
                    ds.records.push(rec);
                }
            }
        }
    }
    ds
}

/// Strings as-is; numbers and booleans as their JSON text. Null, arrays
/// and objects have no scalar form and count as missing.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        v @ (Value::Number(_) | Value::Bool(_)) => Some(v.to_string()),
        _ => None,
    }
}

/// Accepts `{"home": h, "away": a}` or a list whose first element is that
/// object. Anything else (scalar, empty list, absent) is (None, None).
pub fn parse_final(value: Option<&Value>) -> FinalScore {
    let obj = match value {
        Some(Value::Object(map)) => map,
        Some(Value::Array(items)) => match items.first() {
            Some(Value::Object(map)) => map,
            _ => return FinalScore::default(),
        },
        _ => return FinalScore::default(),
    };
    FinalScore {
        home: obj.get("home").and_then(score),
        away: obj.get("away").and_then(score),
    }
}

fn score(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
