use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::metrics::{record_not_found, record_op};
use crate::{LogEntry, LogRange, LogStore, Result, StableStore, StorageError, StoreConfig};

/// Everything guarded by the store lock
#[derive(Debug)]
struct StoreState {
    logs: BTreeMap<u64, LogEntry>,
    /// `None` while the log is empty
    range: Option<LogRange>,
    kv: HashMap<Vec<u8>, Vec<u8>>,
    kv_uint: HashMap<Vec<u8>, u64>,
}

/// Volatile log store and stable store behind one reader/writer lock.
///
/// Reads take the shared lock, writes the exclusive one, so log and
/// metadata are always observed as one consistent snapshot. Share it
/// across threads as `Arc<MemoryStore>`.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
    config: StoreConfig,
}

impl MemoryStore {
    /// Creates an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        debug!("Creating in-memory store: {:?}", config);
        Self {
            state: RwLock::new(StoreState {
                logs: BTreeMap::new(),
                range: None,
                kv: HashMap::with_capacity(config.stable_capacity),
                kv_uint: HashMap::with_capacity(config.stable_capacity),
            }),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of entries inside the retained range
    pub fn len(&self) -> usize {
        let state = self.state.read();
        match state.range {
            Some(range) => state.logs.range(range.first..=range.last).count(),
            None => 0,
        }
    }

    /// `true` when no range is retained, even if entries stored below
    /// `first_index` are still fetchable
    pub fn is_empty(&self) -> bool {
        self.state.read().range.is_none()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore for MemoryStore {
    fn store_entries(
        &self,
        entries: Vec<LogEntry>,
    ) -> Result<()> {
        record_op("store_entries");
        trace!("store_entries len = {:?}", entries.len());

        let mut state = self.state.write();
        for entry in entries {
            let index = entry.index;
            state.logs.insert(index, entry);

            state.range = Some(match state.range {
                None => LogRange::at(index),
                Some(range) => LogRange {
                    first: range.first,
                    last: range.last.max(index),
                },
            });
        }

        Ok(())
    }

    fn fetch_entry(
        &self,
        index: u64,
    ) -> Result<LogEntry> {
        record_op("fetch_entry");

        let state = self.state.read();
        match state.logs.get(&index) {
            Some(entry) => Ok(entry.clone()),
            None => {
                trace!("fetch_entry miss at index {}", index);
                record_not_found("log");
                Err(StorageError::LogNotFound(index).into())
            }
        }
    }

    fn first_index(&self) -> u64 {
        self.state.read().range.map(|r| r.first).unwrap_or(0)
    }

    fn last_index(&self) -> u64 {
        self.state.read().range.map(|r| r.last).unwrap_or(0)
    }

    fn log_range(&self) -> Option<LogRange> {
        self.state.read().range
    }

    fn delete_range(
        &self,
        min: u64,
        max: u64,
    ) -> Result<()> {
        record_op("delete_range");
        trace!("delete_range [{}, {}]", min, max);

        if min > max {
            return Ok(());
        }

        let mut state = self.state.write();

        // Split off [min, ..), then reattach (max, ..)
        let mut tail = state.logs.split_off(&min);
        if let Some(after) = max.checked_add(1) {
            let mut kept = tail.split_off(&after);
            state.logs.append(&mut kept);
        }
        let removed = tail.len();

        let Some(range) = state.range else {
            return Ok(());
        };

        let first = if min <= range.first {
            max.checked_add(1).map(|next| next.max(range.first))
        } else {
            Some(range.first)
        };
        let last = if max >= range.last {
            min.checked_sub(1).map(|prev| prev.min(range.last))
        } else {
            Some(range.last)
        };

        state.range = match (first, last) {
            (Some(first), Some(last)) if first <= last => Some(LogRange { first, last }),
            _ => None,
        };

        match state.range {
            Some(new_range) if new_range != range => {
                debug!("removed {} entries, log range {:?} -> {:?}", removed, range, new_range);
            }
            Some(_) => {}
            None => debug!("removed {} entries, log is now empty", removed),
        }

        Ok(())
    }

    fn get_entries(
        &self,
        range: RangeInclusive<u64>,
    ) -> Result<Vec<LogEntry>> {
        record_op("get_entries");

        if range.is_empty() {
            return Ok(Vec::new());
        }

        let state = self.state.read();
        let Some(retained) = state.range else {
            return Ok(Vec::new());
        };

        let start = (*range.start()).max(retained.first);
        let end = (*range.end()).min(retained.last);
        if start > end {
            return Ok(Vec::new());
        }

        Ok(state
            .logs
            .range(start..=end)
            .take(self.config.max_entries_per_read)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    fn reset(&self) -> Result<()> {
        record_op("reset");

        let mut state = self.state.write();
        state.logs.clear();
        state.range = None;

        debug!("log store reset");
        Ok(())
    }
}

impl StableStore for MemoryStore {
    fn put_bytes(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        record_op("put_bytes");
        self.state.write().kv.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_bytes(
        &self,
        key: &[u8],
    ) -> Result<Vec<u8>> {
        record_op("get_bytes");

        let state = self.state.read();
        match state.kv.get(key) {
            Some(value) => Ok(value.clone()),
            None => {
                record_not_found("bytes");
                Err(StorageError::KeyNotFound(key.to_vec()).into())
            }
        }
    }

    fn put_uint(
        &self,
        key: &[u8],
        value: u64,
    ) -> Result<()> {
        record_op("put_uint");
        self.state.write().kv_uint.insert(key.to_vec(), value);
        Ok(())
    }

    fn get_uint(
        &self,
        key: &[u8],
    ) -> Result<u64> {
        record_op("get_uint");
        Ok(self.state.read().kv_uint.get(key).copied().unwrap_or(0))
    }
}
