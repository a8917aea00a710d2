// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/parse/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of routines about to be parsed.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one routine is parsed (`label` like "BSCSE 45 A").
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// Called at the end of parsing.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
