//! In-memory implementation of `LogSink`.
//!
//! `InMemoryLog` keeps every entry in a `Vec` in append order. Nothing is
//! flushed anywhere; the entries live exactly as long as the value. Use
//! `export()` to take a serializable snapshot.

use tracing::trace;

use vitalcheck_core::traits::LogSink;

use crate::snapshot::LogSnapshot;

/// An append-only, unsynchronized log of intake entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLog {
    entries: Vec<String>,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Copy the current entries into a `LogSnapshot`.
    pub fn export(&self) -> LogSnapshot {
        LogSnapshot {
            entry_count: self.entries.len(),
            entries: self.entries.clone(),
        }
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl LogSink for InMemoryLog {
    fn log(&mut self, message: String) {
        trace!(position = self.entries.len(), entry = %message, "log entry appended");
        self.entries.push(message);
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }
}
