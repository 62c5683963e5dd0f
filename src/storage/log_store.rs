//! Core model in Raft: LogStore Definition

use std::ops::RangeInclusive;

#[cfg(test)]
use mockall::automock;

use crate::{LogEntry, LogId, LogRange, Result};

/// Indexed sequence of replicated log entries.
///
/// The consensus engine assigns indices; the store keys every entry by its
/// own `index` and tracks the retained `[first, last]` bounds so that
/// `first_index`/`last_index` stay O(1) on the replication hot path.
#[cfg_attr(test, automock)]
pub trait LogStore: Send + Sync + 'static {
    /// Insert a batch of entries, each keyed by its own index.
    ///
    /// The first insertion into an empty log fixes `first_index`;
    /// `last_index` becomes the highest index stored so far.
    fn store_entries(
        &self,
        entries: Vec<LogEntry>,
    ) -> Result<()>;

    fn store_entry(
        &self,
        entry: LogEntry,
    ) -> Result<()> {
        self.store_entries(vec![entry])
    }

    /// Copy of the entry at `index`, or
    /// [`crate::StorageError::LogNotFound`] if it is not retained.
    fn fetch_entry(
        &self,
        index: u64,
    ) -> Result<LogEntry>;

    /// 0 when empty
    fn first_index(&self) -> u64;

    /// 0 when empty
    fn last_index(&self) -> u64;

    /// Retained bounds, `None` when the log is empty
    fn log_range(&self) -> Option<LogRange>;

    /// Remove every entry with index in `[min, max]`.
    ///
    /// Deleting from the front advances `first_index` past `max`, deleting
    /// from the back retreats `last_index` before `min`. When the bounds
    /// cross the log is empty and both read as 0. Bounds only ever move
    /// inward: a range lying wholly below `first_index` or above
    /// `last_index` leaves both bounds unchanged.
    fn delete_range(
        &self,
        min: u64,
        max: u64,
    ) -> Result<()>;

    /// Retained entries in `range` clamped to `[first_index, last_index]`,
    /// ascending, absent indices skipped.
    /// Implementations may cap the number of entries returned.
    fn get_entries(
        &self,
        range: RangeInclusive<u64>,
    ) -> Result<Vec<LogEntry>>;

    /// Drop all entries and return to the empty state
    fn reset(&self) -> Result<()>;
}

/// Id of the newest retained entry, `None` for an empty log.
pub fn last_log_id<L>(log: &L) -> Result<Option<LogId>>
where
    L: LogStore + ?Sized,
{
    match log.log_range() {
        Some(range) => Ok(Some(log.fetch_entry(range.last)?.log_id())),
        None => Ok(None),
    }
}
