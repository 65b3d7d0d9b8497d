// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod front_matter;
pub mod model;
pub mod pages;
pub mod progress;
pub mod runner;
pub mod sources;

pub use config::{CollisionPolicy, GenOptions, Variant};
pub use error::{GenError, Result};
pub use runner::{run, RunSummary};
