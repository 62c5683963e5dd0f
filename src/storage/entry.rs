//! Log entry model shared by every [`crate::LogStore`] implementation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Kind of a replicated log entry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Client command applied to the state machine
    #[default]
    Command,
    /// Written by a new leader to commit entries from earlier terms
    Noop,
    /// Marks that everything before it has been applied
    Barrier,
    /// Cluster membership change
    Configuration,
}

/// Position of an entry in the replicated log
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LogId {
    pub index: u64,
    pub term: u64,
}

/// One unit of the replicated log.
///
/// `data` is reference counted and immutable, so clones handed to or
/// returned from a store never alias mutable state.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogEntry {
    /// Assigned by the consensus engine, never by the store
    pub index: u64,
    pub term: u64,
    pub entry_type: EntryType,
    pub data: Bytes,
}

impl LogEntry {
    pub fn new(
        index: u64,
        term: u64,
        entry_type: EntryType,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            index,
            term,
            entry_type,
            data: data.into(),
        }
    }

    pub fn command(
        index: u64,
        term: u64,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(index, term, EntryType::Command, data)
    }

    pub fn noop(
        index: u64,
        term: u64,
    ) -> Self {
        Self::new(index, term, EntryType::Noop, Bytes::new())
    }

    pub fn log_id(&self) -> LogId {
        LogId {
            index: self.index,
            term: self.term,
        }
    }
}

/// Inclusive bounds of the retained log
///
/// An empty log has no range at all; callers that only see
/// `first_index`/`last_index` observe `0` for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRange {
    pub first: u64,
    pub last: u64,
}

impl LogRange {
    /// Range covering a single index
    pub fn at(index: u64) -> Self {
        Self {
            first: index,
            last: index,
        }
    }
}
