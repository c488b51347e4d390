//! Layout Module
//!
//! Byte layout of an environment blob and the codec for its entries region.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header (header_size bytes, 5 by default)                 │
//! │ ┌──────────────────┬───────────────────────────────────┐ │
//! │ │ CRC32 LE (4)     │ Padding (header_size - 4)         │ │
//! │ └──────────────────┴───────────────────────────────────┘ │
//! ├──────────────────────────────────────────────────────────┤
//! │ Entries region (total_size - header_size bytes)          │
//! │   "key=value\0" "key=value\0" ... \0\0\0\0 (zero fill)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The CRC covers the whole entries region, padding included, and never
//! the header. Both sides must agree on `header_size`.

mod codec;

pub use codec::{decode, encode, encoded_len, EnvMap};

// =============================================================================
// Shared Constants
// =============================================================================

/// Width of the stored CRC32 field
pub const CRC_SIZE: usize = 4;

/// Header size of a single-copy environment: CRC (4) + flag/padding byte (1)
pub const DEFAULT_HEADER_SIZE: usize = 5;

/// Terminates every entry and fills the unused tail of the region
pub(crate) const NUL: u8 = 0x00;

/// First byte of never-written (erased) flash
pub(crate) const ERASED: u8 = 0xFF;

/// Separates key from value inside an entry
pub(crate) const SEPARATOR: u8 = b'=';
