// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a generation run.
/// The CLI implements this to surface status; tests use it to observe order.
pub trait Progress {
    /// Called once per phase with the number of pages about to be written.
    fn begin(&mut self, _phase: &str, _total: usize) {}

    /// Called after each page file is written.
    fn item_done(&mut self, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
