// src/progress.rs
/// Progress reporting for a run. The CLI implements this to print status
/// lines; tests implement it to record calls. Passed in explicitly, never
/// held globally.
pub trait Progress {
    /// Called before the mutation loop with the number of icons.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One icon's query was accepted by the store.
    fn item_done(&mut self, _icon: &str) {}

    /// One icon's query failed (`reason` is printable).
    fn item_failed(&mut self, _icon: &str, _reason: &str) {}

    /// Called at the end of the loop, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
