// src/pages.rs
//
// Season and game page emitters. Each variant has a fixed front-matter
// schema; missing values are written empty, never omitted.

use std::path::PathBuf;

use crate::config::consts::{GAME_LAYOUT, SEASON_LAYOUT, TABLE_SEASON_TITLE_SUFFIX};
use crate::config::{GenOptions, Variant};
use crate::core::SlugRegistry;
use crate::error::Result;
use crate::file::write_page;
use crate::front_matter::FrontMatter;
use crate::model::{Dataset, Record};
use crate::progress::Progress;

const SEASON_PLACEHOLDER: &str = "{season}";

/* ---------------- Titles ---------------- */

/// `--season-title` is a template; `{season}` is replaced, otherwise the
/// text is used as-is.
pub fn season_title(opts: &GenOptions, season: i64) -> String {
    match &opts.season_title {
        Some(tmpl) => tmpl.replace(SEASON_PLACEHOLDER, &season.to_string()),
        None if opts.variant.is_tabular() => format!("{season} {TABLE_SEASON_TITLE_SUFFIX}"),
        None => season.to_string(),
    }
}

pub fn game_title(variant: Variant, rec: &Record) -> String {
    let away = rec.away_team.as_deref().unwrap_or("");
    let home = rec.home_team.as_deref().unwrap_or("");
    match variant {
        Variant::Ids => format!("Week {} – Game {}", rec.week, rec.game_id),
        Variant::Matchup => format!("Week {} – {away} at {home}", rec.week),
        Variant::Index => format!("Week {} — {away} at {home}", rec.week),
    }
}

/* ---------------- Front matter ---------------- */

pub fn season_front_matter(opts: &GenOptions, season: i64) -> FrontMatter {
    front_matter! {
        "layout" => SEASON_LAYOUT,
        "title" => season_title(opts, season),
        "season" => season,
    }
}

pub fn game_front_matter(variant: Variant, rec: &Record) -> FrontMatter {
    let mut fm = front_matter! {
        "layout" => GAME_LAYOUT,
        "title" => game_title(variant, rec),
        "season" => rec.season,
        "game_id" => rec.game_id.as_str(),
    };
    match variant {
        Variant::Ids => {}
        Variant::Matchup => {
            fm.push("away_team", rec.away_team.as_deref());
            fm.push("home_team", rec.home_team.as_deref());
        }
        Variant::Index => {
            fm.push("week", rec.week);
            fm.push("date", rec.date.as_deref());
            fm.push("home_team", rec.home_team.as_deref());
            fm.push("away_team", rec.away_team.as_deref());
            fm.push("final_home", rec.final_score.home);
            fm.push("final_away", rec.final_score.away);
            fm.push("pbp_url", rec.pbp_url.as_deref());
        }
    }
    fm
}

/* ---------------- Emitters ---------------- */

/// One `<season>.<ext>` per season, ascending.
pub fn emit_seasons(
    opts: &GenOptions,
    ds: &Dataset,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ds.seasons.len());
    for &season in &ds.seasons {
        let path = opts.season_file(season);
        write_page(&path, &season_front_matter(opts, season).render())?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&path);
        }
        written.push(path);
    }
    Ok(written)
}

/// One `<slug>.<ext>` per (season, week, game_id) group.
///
/// Slugs are resolved for every game before the first write, so an
/// `error` collision policy fails without writing any game page.
pub fn emit_games(
    opts: &GenOptions,
    ds: &Dataset,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<PathBuf>> {
    let games = ds.games();
    let mut slugs = SlugRegistry::new(opts.on_collision);
    let mut planned = Vec::with_capacity(games.len());
    for rec in games {
        planned.push((slugs.resolve(&rec.game_id)?, rec));
    }

    let mut written = Vec::with_capacity(planned.len());
    for (slug, rec) in planned {
        let path = opts.game_file(&slug);
        write_page(&path, &game_front_matter(opts.variant, rec).render())?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&path);
        }
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::model::FinalScore;

    #[derive(Default)]
    struct Sink {
        done: Vec<PathBuf>,
    }

    impl Progress for Sink {
        fn item_done(&mut self, path: &Path) {
            self.done.push(path.to_path_buf());
        }
    }

    fn sample() -> Record {
        let mut rec = Record::new(2023, 1, "2023_W1_PHI_NE");
        rec.home_team = Some(s!("PHI"));
        rec.away_team = Some(s!("NE"));
        rec
    }

    #[test]
    fn titles_per_variant() {
        let rec = sample();
        assert_eq!(game_title(Variant::Ids, &rec), "Week 1 – Game 2023_W1_PHI_NE");
        assert_eq!(game_title(Variant::Matchup, &rec), "Week 1 – NE at PHI");
        assert_eq!(game_title(Variant::Index, &rec), "Week 1 — NE at PHI");
    }

    #[test]
    fn season_titles() {
        let table = GenOptions::for_variant(Variant::Ids);
        assert_eq!(season_title(&table, 2021), "2021 Eagles 4th Downs");

        let index = GenOptions::for_variant(Variant::Index);
        assert_eq!(season_title(&index, 2021), "2021");

        let mut custom = GenOptions::for_variant(Variant::Matchup);
        custom.season_title = Some(s!("Season {season} Decisions"));
        assert_eq!(season_title(&custom, 2021), "Season 2021 Decisions");
    }

    #[test]
    fn schemas_are_fixed_per_variant() {
        let rec = sample();
        let keys = |v| game_front_matter(v, &rec).keys().collect::<Vec<_>>();
        assert_eq!(keys(Variant::Ids), ["layout", "title", "season", "game_id"]);
        assert_eq!(
            keys(Variant::Matchup),
            ["layout", "title", "season", "game_id", "away_team", "home_team"]
        );
        assert_eq!(
            keys(Variant::Index),
            [
                "layout", "title", "season", "game_id", "week", "date", "home_team",
                "away_team", "final_home", "final_away", "pbp_url",
            ]
        );
    }

    #[test]
    fn index_game_page_renders_scores() {
        let mut rec = sample();
        rec.final_score = FinalScore { home: Some(25), away: Some(20) };
        rec.pbp_url = Some(s!("http://x"));
        let text = game_front_matter(Variant::Index, &rec).render();
        assert_eq!(
            text,
            "---\nlayout: game\ntitle: Week 1 — NE at PHI\nseason: 2023\ngame_id: 2023_W1_PHI_NE\n\
             week: 1\ndate:\nhome_team: PHI\naway_team: NE\nfinal_home: 25\nfinal_away: 20\n\
             pbp_url: http://x\n---"
        );
    }

    #[test]
    fn emitters_report_each_page_to_the_sink() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = GenOptions::rooted_at(Variant::Ids, tmp.path());
        let ds = Dataset::from_records(vec![sample(), Record::new(2022, 3, "G7")]);
        std::fs::create_dir_all(&opts.seasons_dir).unwrap();
        std::fs::create_dir_all(&opts.games_dir).unwrap();

        let mut sink = Sink::default();
        let seasons = emit_seasons(&opts, &ds, Some(&mut sink)).unwrap();
        assert_eq!(seasons, [opts.season_file(2022), opts.season_file(2023)]);
        assert_eq!(sink.done, seasons);

        // the same sink can be lent again for the next phase
        let games = emit_games(&opts, &ds, Some(&mut sink)).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(sink.done.len(), 4);
        assert_eq!(&sink.done[2..], &games[..]);

        assert!(emit_seasons(&opts, &ds, None).is_ok());
    }
}
