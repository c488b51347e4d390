//! Configuration for uenv
//!
//! Layout and durability settings held by each store, with sensible defaults.

use crate::error::{EnvError, Result};
use crate::layout::{CRC_SIZE, DEFAULT_HEADER_SIZE};

/// Per-store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Layout Configuration
    // -------------------------------------------------------------------------
    /// Bytes in front of the entries region: 4-byte CRC followed by
    /// `header_size - 4` padding bytes (the redundancy flag slot).
    pub header_size: usize,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How `Store::save` flushes the backing file before returning
    pub sync_strategy: SyncStrategy,
}

/// Flush performed at the end of every save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// `fsync`: file data and metadata
    #[default]
    All,

    /// `fdatasync`: file data only (the size never changes)
    Data,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_size: DEFAULT_HEADER_SIZE,
            sync_strategy: SyncStrategy::All,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the header can hold at least the CRC field
    pub fn validate(&self) -> Result<()> {
        if self.header_size < CRC_SIZE {
            return Err(EnvError::Config(format!(
                "header_size {} is smaller than the {}-byte CRC",
                self.header_size, CRC_SIZE
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the header size (CRC plus padding)
    pub fn header_size(mut self, size: usize) -> Self {
        self.config.header_size = size;
        self
    }

    /// Set the flush performed at the end of a save
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
