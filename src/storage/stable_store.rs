//! Core model in Raft: StableStore Definition, e.g. current_term, vote record

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::HARD_STATE_KEY;
use crate::{Result, StorageError};

/// Small key-value metadata the consensus engine keeps between operations.
///
/// Bytes and integers live in independent key spaces.
#[cfg_attr(test, automock)]
pub trait StableStore: Send + Sync + 'static {
    fn put_bytes(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()>;

    /// [`StorageError::KeyNotFound`] if `key` was never set
    fn get_bytes(
        &self,
        key: &[u8],
    ) -> Result<Vec<u8>>;

    fn put_uint(
        &self,
        key: &[u8],
        value: u64,
    ) -> Result<()>;

    /// Unset keys read as 0; this namespace never reports "not found".
    fn get_uint(
        &self,
        key: &[u8],
    ) -> Result<u64>;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VotedFor {
    pub voted_for_id: u32,
    pub voted_for_term: u64,
}

/// Persistent state on all servers: updated on stable storage before
/// responding to RPCs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HardState {
    /// Latest term the server has seen, increases monotonically
    pub current_term: u64,
    /// Candidate that received this server's vote in the current term
    pub voted_for: Option<VotedFor>,
}

/// Hard state persistence on top of any [`StableStore`]
pub trait HardStateStore: StableStore {
    fn save_hard_state(
        &self,
        state: &HardState,
    ) -> Result<()> {
        let serialized = bincode::serialize(state).map_err(StorageError::BincodeError)?;
        self.put_bytes(HARD_STATE_KEY, &serialized)?;

        debug!("Persisted hard state: {:?}", state);
        Ok(())
    }

    fn load_hard_state(&self) -> Result<Option<HardState>> {
        match self.get_bytes(HARD_STATE_KEY) {
            Ok(bytes) => {
                let state = bincode::deserialize(&bytes).map_err(StorageError::BincodeError)?;
                debug!("Loaded hard state: {:?}", state);
                Ok(Some(state))
            }
            Err(e) if e.is_key_not_found() => {
                debug!("No hard state found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl<S: StableStore + ?Sized> HardStateStore for S {}
