//! Serializable copy of a log's contents.

use serde::{Deserialize, Serialize};

/// The entries of an `InMemoryLog` at the moment `export()` was called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSnapshot {
    /// Number of entries, equal to `entries.len()`.
    pub entry_count: usize,

    /// Entries in insertion order, oldest first.
    pub entries: Vec<String>,
}
