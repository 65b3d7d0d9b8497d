//! # Data sources
//!
//! Each source knows how to read **one input shape** and hand back a
//! [`Dataset`] of normalized [`Record`](crate::model::Record)s. Nothing
//! downstream cares which file format the records came from.
//!
//! ## What lives here
//! - **Reading and decoding** the input file (delimited table or JSON index).
//! - **Row hygiene** for tabular input: rows missing season, week or game id
//!   are dropped silently (debug log only).
//! - **Optional-field extraction** with a defined fallback (`None`), so a
//!   missing team, date or final score is a normal branch, not a failure.
//!
//! ## What does **not** live here
//! - Touching the output directories. A load failure must leave previous
//!   output exactly as it was, so sources never write.
//! - Titles, slugs, front matter. See `pages`.
//!
//! ## Typical call chain
//! ```text
//! runner::run → sources::for_options() → RecordSource::load()
//!                                      ↘ Dataset
//!            → file::reset_output_dir ×2 → pages::emit_*
//! ```
pub mod index;
pub mod tabular;

use std::path::Path;

use crate::config::GenOptions;
use crate::error::{GenError, Result};
use crate::model::Dataset;

pub use index::IndexSource;
pub use tabular::TabularSource;

/// Anything that can yield normalized records.
pub trait RecordSource {
    fn load(&self) -> Result<Dataset>;
}

/// The adapter a variant reads with.
pub fn for_options(opts: &GenOptions) -> Box<dyn RecordSource> {
    if opts.variant.is_tabular() {
        Box::new(TabularSource::new(opts.input(), opts.delimiter))
    } else {
        Box::new(IndexSource::new(opts.input()))
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GenError::Read { path: path.to_path_buf(), source })
}
