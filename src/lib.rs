//! Volatile, process-local storage for a Raft consensus engine.
//!
//! [`MemoryStore`] is a single handle implementing both capability sets the
//! engine consumes:
//! - [`LogStore`]: indexed log entries with O(1) first/last bounds and
//!   range deletion for compaction.
//! - [`StableStore`]: byte and integer metadata (current term, vote record).
//!
//! Nothing is persisted; all state lives as long as the store value.

mod config;
mod constants;
mod errors;
pub mod metrics;
mod storage;

pub use self::config::*;
pub use constants::HARD_STATE_KEY;
pub use errors::*;
pub use storage::*;


//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
