//! Error types for uenv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EnvError
pub type Result<T> = std::result::Result<T, EnvError>;

/// Unified error type for environment store operations
#[derive(Debug, Error)]
pub enum EnvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Integrity Errors
    // -------------------------------------------------------------------------
    #[error("bad CRC: stored {stored:#010x} != computed {computed:#010x}")]
    Integrity { stored: u32, computed: u32 },

    // -------------------------------------------------------------------------
    // Layout Errors
    // -------------------------------------------------------------------------
    #[error("Malformed entry: {0:?}")]
    MalformedEntry(String),

    #[error("Environment too large: need {needed} bytes, capacity is {capacity}")]
    EnvironmentTooLarge { needed: usize, capacity: usize },

    #[error("Invalid store size {size}: smaller than the {header_size}-byte header")]
    InvalidSize { size: usize, header_size: usize },

    #[error("Backing file is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: u64, actual: u64 },

    // -------------------------------------------------------------------------
    // Import Errors
    // -------------------------------------------------------------------------
    #[error("Invalid line: {0:?}")]
    InvalidLine(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
