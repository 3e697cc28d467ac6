//! Trait seam between the intake workflow and where its log entries go.

/// An append-only, insertion-ordered sink for intake log entries.
///
/// Entries are plain strings. Implementations must keep every entry in the
/// order it was logged: no deduplication, no eviction, no size bound.
/// Sinks are single-caller and mutated through `&mut self`.
pub trait LogSink {
    /// Append one entry.
    fn log(&mut self, message: String);

    /// Every entry logged so far, oldest first.
    fn entries(&self) -> &[String];
}
