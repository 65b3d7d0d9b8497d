// src/sources/tabular.rs
//
// Play-by-play style tables: one row per play, many rows per game.
// Columns: season, week, game_id (required); home_team, away_team (optional).
// Any other column is ignored.

use std::path::{Path, PathBuf};

use super::{read_text, RecordSource};
use crate::core::sanitize::{parse_ordinal, present, present_owned};
use crate::csv::Table;
use crate::error::{GenError, Result};
use crate::model::{Dataset, Record};

pub struct TabularSource {
    path: PathBuf,
    sep: char,
}

impl TabularSource {
    pub fn new(path: impl Into<PathBuf>, sep: char) -> Self {
        Self { path: path.into(), sep }
    }
}

impl RecordSource for TabularSource {
    fn load(&self) -> Result<Dataset> {
        let text = read_text(&self.path)?;
        let table = Table::parse(&text, self.sep);
        let (records, dropped) = clean(&table, &self.path)?;

        logd!("{}: {} rows kept, {} dropped", self.path.display(), records.len(), dropped);

        let mut ds = Dataset::from_records(records);
        ds.dropped = dropped;
        Ok(ds)
    }
}

/// Rows → records, discarding any row without a usable season, week or game id.
/// Returns the kept records and the number dropped.
fn clean(table: &Table, path: &Path) -> Result<(Vec<Record>, usize)> {
    let required = |column: &'static str| {
        table
            .column(column)
            .map(Some)
            .ok_or_else(|| GenError::MissingColumn { path: path.to_path_buf(), column })
    };
    let season_col = required("season")?;
    let week_col = required("week")?;
    let game_col = required("game_id")?;
    let home_col = table.column("home_team");
    let away_col = table.column("away_team");

    let mut kept = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;

    for row in &table.rows {
        let season = parse_ordinal(table.cell(row, season_col));
        let week = parse_ordinal(table.cell(row, week_col));
        let game_id = present(table.cell(row, game_col));

        let (Some(season), Some(week), Some(game_id)) = (season, week, game_id) else {
            dropped += 1;
            continue;
        };

        let mut rec = Record::new(season, week, game_id);
        rec.home_team = present_owned(table.cell(row, home_col));
        rec.away_team = present_owned(table.cell(row, away_col));
        kept.push(rec);
    }

    Ok((kept, dropped))
}
