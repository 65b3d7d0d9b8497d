// src/core/mod.rs

pub mod sanitize;
pub mod slug;

pub use slug::{slugify, SlugRegistry};
