// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("could not read {}", .path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    #[error("could not write {}", .path.display())]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("could not remove {}", .path.display())]
    Remove { path: PathBuf, #[source] source: io::Error },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("malformed game index {}", .path.display())]
    Json { path: PathBuf, #[source] source: serde_json::Error },

    #[error("{}: missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("game ids `{first}` and `{second}` both encode to slug `{slug}`")]
    SlugCollision { slug: String, first: String, second: String },
}
