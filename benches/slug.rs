// benches/slug.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fourth_down_pages::config::Variant;
use fourth_down_pages::core::slugify;
use fourth_down_pages::model::{FinalScore, Record};
use fourth_down_pages::pages::game_front_matter;

fn sample_ids() -> Vec<String> {
    let teams = ["PHI", "NE", "DAL", "NYG", "WAS", "MIN", "GB", "DET"];
    let mut ids = Vec::new();
    for season in 1999..2025 {
        for week in 1..=22 {
            let (h, a) = (teams[week % teams.len()], teams[(week + 3) % teams.len()]);
            ids.push(format!("{season}_{week:02}_{a}_{h}"));
        }
    }
    ids
}

fn bench_slugify(c: &mut Criterion) {
    let ids = sample_ids();
    c.bench_function("slugify_full_history", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(slugify(black_box(id)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rec = Record::new(2023, 1, "2023_W1_PHI_NE");
    rec.home_team = Some("PHI".into());
    rec.away_team = Some("NE".into());
    rec.final_score = FinalScore { home: Some(25), away: Some(20) };
    rec.pbp_url = Some("http://x".into());

    c.bench_function("index_game_front_matter", |b| {
        b.iter(|| black_box(game_front_matter(Variant::Index, black_box(&rec)).render()))
    });
}

criterion_group!(benches, bench_slugify, bench_render);
criterion_main!(benches);
