// src/model.rs
//
// Normalized records every data source yields, and the dataset the
// emitters consume. Everything here is rebuilt from the input on each run.

use std::collections::BTreeSet;

/// Final score as a flat (home, away) pair; either side may be unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalScore {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

/// One row (tabular) or one game entry (index), already validated for
/// the identifying fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub season: i64,
    pub week: i64,
    pub game_id: String,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub date: Option<String>,
    pub final_score: FinalScore,
    pub pbp_url: Option<String>,
}

impl Record {
    pub fn new(season: i64, week: i64, game_id: impl Into<String>) -> Self {
        Self { season, week, game_id: game_id.into(), ..Self::default() }
    }

    /// Grouping key for game pages.
    pub fn game_key(&self) -> (i64, i64, &str) {
        (self.season, self.week, self.game_id.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Seasons that get a page. Always a superset of the records' seasons.
    pub seasons: BTreeSet<i64>,
    /// Rows the cleaner discarded.
    pub dropped: usize,
}

impl Dataset {
    /// Seasons derived from the records themselves.
    pub fn from_records(records: Vec<Record>) -> Self {
        let seasons = records.iter().map(|r| r.season).collect();
        Self { records, seasons, dropped: 0 }
    }

    /// Records in (season, week, game_id) order, first record per game only.
    pub fn games(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        // stable: the first row of each group stays first
        sorted.sort_by(|a, b| a.game_key().cmp(&b.game_key()));
        sorted.dedup_by(|b, a| a.game_key() == b.game_key());
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_groups_and_keeps_first_row() {
        let mut late = Record::new(2023, 2, "G2");
        late.home_team = Some(s!("first"));
        let mut dup = Record::new(2023, 2, "G2");
        dup.home_team = Some(s!("second"));
        let ds = Dataset::from_records(vec![
            late,
            Record::new(2022, 5, "G9"),
            dup,
            Record::new(2023, 1, "G1"),
        ]);

        let games = ds.games();
        let keys: Vec<_> = games.iter().map(|r| r.game_key()).collect();
        assert_eq!(keys, vec![(2022, 5, "G9"), (2023, 1, "G1"), (2023, 2, "G2")]);
        assert_eq!(games[2].home_team.as_deref(), Some("first"));
        assert_eq!(ds.seasons.iter().copied().collect::<Vec<_>>(), vec![2022, 2023]);
    }
}
