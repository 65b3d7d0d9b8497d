// src/core/slug.rs
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::CollisionPolicy;
use crate::error::{GenError, Result};

fn non_slug_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"))
}

/// Lowercase, then collapse every run outside `[a-z0-9]` into one `-`.
/// Leading/trailing separators are kept: `"_x_"` → `"-x-"`.
pub fn slugify(game_id: &str) -> String {
    let lower = game_id.to_lowercase();
    non_slug_run().replace_all(&lower, "-").into_owned()
}

/// Slug ownership **only within this run**.
///
/// The same game id always gets the same slug back. A second, distinct id
/// landing on a taken slug is handled per [`CollisionPolicy`].
#[derive(Debug, Default)]
pub struct SlugRegistry {
    policy: CollisionPolicy,
    owner_by_slug: HashMap<String, String>,
    slug_by_id: HashMap<String, String>,
    next_suffix: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn resolve(&mut self, game_id: &str) -> Result<String> {
        if let Some(known) = self.slug_by_id.get(game_id) {
            return Ok(known.clone());
        }

        let base = slugify(game_id);
        let slug = match self.owner_by_slug.get(&base) {
            None => base,
            Some(owner) => match self.policy {
                CollisionPolicy::Overwrite => {
                    logw!("game ids `{owner}` and `{game_id}` share slug `{base}`; last one wins");
                    base
                }
                CollisionPolicy::Error => {
                    return Err(GenError::SlugCollision {
                        slug: base,
                        first: owner.clone(),
                        second: s!(game_id),
                    });
                }
                CollisionPolicy::Suffix => self.next_free(&base),
            },
        };

        self.owner_by_slug.insert(slug.clone(), s!(game_id));
        self.slug_by_id.insert(s!(game_id), slug.clone());
        Ok(slug)
    }

    // First free "<base>-N", N starting at 2
    fn next_free(&mut self, base: &str) -> String {
        let n = self.next_suffix.entry(s!(base)).or_insert(2);
        loop {
            let candidate = format!("{base}-{n}");
            *n += 1;
            if !self.owner_by_slug.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
