//! Store configuration.
//!
//! Loaded from built-in defaults, optionally overridden by a TOML file:
//!
//! ```toml
//! stable_capacity = 32
//! max_entries_per_read = 128
//! ```

#[cfg(test)]
mod config_test;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_MAX_ENTRIES_PER_READ, DEFAULT_STABLE_CAPACITY};
use crate::{Error, Result};

/// Tuning knobs for [`crate::MemoryStore`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Initial capacity reserved for each stable store map
    ///
    /// Default: 16
    #[serde(default = "default_stable_capacity")]
    pub stable_capacity: usize,

    /// Maximum number of entries returned by a single
    /// [`crate::LogStore::get_entries`] call
    ///
    /// Must be positive. Default: 64
    #[serde(default = "default_max_entries_per_read")]
    pub max_entries_per_read: usize,
}

fn default_stable_capacity() -> usize {
    DEFAULT_STABLE_CAPACITY
}

fn default_max_entries_per_read() -> usize {
    DEFAULT_MAX_ENTRIES_PER_READ
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            stable_capacity: default_stable_capacity(),
            max_entries_per_read: default_max_entries_per_read(),
        }
    }
}

impl StoreConfig {
    /// Load configuration with priority:
    /// 1. Built-in defaults
    /// 2. TOML file at `path` (must exist when given)
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&StoreConfig::default())?);

        if let Some(path) = path {
            debug!("loading store config from {}", path);
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
        }

        let config: StoreConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.max_entries_per_read == 0 {
            return Err(Error::Config(ConfigError::Message(
                "max_entries_per_read must be greater than 0".to_string(),
            )));
        }
        Ok(())
    }
}
