use crate::{EntryType, LogEntry};

/// Hands out consecutive entries starting at `start_index`
pub struct EntryBuilder {
    index: u64,
    term: u64,
}

impl EntryBuilder {
    pub fn new(
        start_index: u64,
        term: u64,
    ) -> Self {
        Self {
            index: start_index,
            term,
        }
    }

    pub fn command(
        mut self,
        data: &[u8],
    ) -> (Self, LogEntry) {
        let entry = LogEntry::command(self.index, self.term, data.to_vec());
        self.index += 1;
        (self, entry)
    }

    pub fn config(
        mut self,
        data: &[u8],
    ) -> (Self, LogEntry) {
        let entry = LogEntry::new(self.index, self.term, EntryType::Configuration, data.to_vec());
        self.index += 1;
        (self, entry)
    }

    pub fn noop(mut self) -> (Self, LogEntry) {
        let entry = LogEntry::noop(self.index, self.term);
        self.index += 1;
        (self, entry)
    }
}

/// Command entries for every index in `indices`, payload = index as big-endian bytes
pub fn commands(
    indices: impl IntoIterator<Item = u64>,
    term: u64,
) -> Vec<LogEntry> {
    indices
        .into_iter()
        .map(|index| LogEntry::command(index, term, index.to_be_bytes().to_vec()))
        .collect()
}
