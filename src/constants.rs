// -
// Stable store keys

/// Bytes-namespace key holding the bincode-encoded [`crate::HardState`]
pub const HARD_STATE_KEY: &[u8] = b"_stable_store_hard_state";

// -
// Configuration defaults

/// Initial capacity of each stable store map
pub(crate) const DEFAULT_STABLE_CAPACITY: usize = 16;

/// Upper bound on entries returned by one range read
pub(crate) const DEFAULT_MAX_ENTRIES_PER_READ: usize = 64;
