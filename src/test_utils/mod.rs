//! Shared helpers for unit tests
mod entry_builder;

pub use entry_builder::*;
