//! Integrity Check
//!
//! CRC32 (IEEE polynomial) over the entries region, shared by load and save.

use crate::layout::CRC_SIZE;

/// CRC32/IEEE of `bytes`
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// True when `bytes` hash to `expected`
pub fn verify(expected: u32, bytes: &[u8]) -> bool {
    checksum(bytes) == expected
}

/// Read the little-endian CRC stored at the start of a blob.
///
/// Returns `None` if the blob is shorter than the CRC field.
pub fn read_stored(blob: &[u8]) -> Option<u32> {
    let field: [u8; CRC_SIZE] = blob.get(..CRC_SIZE)?.try_into().ok()?;
    Some(u32::from_le_bytes(field))
}
