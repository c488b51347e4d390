//! Layout codec
//!
//! Pure encode/decode of the entries region. No I/O happens here.

use std::collections::BTreeMap;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{EnvError, Result};

use super::{ERASED, NUL, SEPARATOR};

/// Key/value mapping held by a store. Sorted keys give a deterministic
/// encode order.
pub type EnvMap = BTreeMap<String, String>;

// =============================================================================
// Decoding
// =============================================================================

/// Decode an entries region into a mapping
///
/// The region is split on NUL bytes. Empty candidates and candidates starting
/// with `0x00` or `0xFF` (erased flash) are skipped. Every other candidate is
/// split on its first `=`; a later duplicate key overwrites an earlier one.
///
/// Entries must be valid UTF-8. A candidate that is not fails with
/// `MalformedEntry` even when it contains `=`, so a later save can never
/// rewrite its bytes.
pub fn decode(region: &[u8]) -> Result<EnvMap> {
    let mut map = EnvMap::new();

    for candidate in region.split(|&b| b == NUL) {
        match candidate.first() {
            None => continue,
            Some(&ERASED) => {
                tracing::trace!("Skipping erased run of {} bytes", candidate.len());
                continue;
            }
            Some(_) => {}
        }

        let text = std::str::from_utf8(candidate).map_err(|_| {
            EnvError::MalformedEntry(String::from_utf8_lossy(candidate).into_owned())
        })?;

        let (key, value) = text
            .split_once(SEPARATOR as char)
            .ok_or_else(|| EnvError::MalformedEntry(text.to_string()))?;

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

// =============================================================================
// Encoding
// =============================================================================

/// Bytes needed to store every entry, terminators included, without padding
pub fn encoded_len(map: &EnvMap) -> usize {
    map.iter()
        .map(|(key, value)| key.len() + 1 + value.len() + 1)
        .sum()
}

/// Encode a mapping into an entries region of exactly `capacity` bytes
///
/// Format per entry: key + `=` + value + NUL, then zero fill out to
/// `capacity`. Fails without producing anything if an entry could not be
/// decoded back or the entries do not fit.
pub fn encode(map: &EnvMap, capacity: usize) -> Result<Bytes> {
    for (key, value) in map {
        check_entry(key, value)?;
    }

    let needed = encoded_len(map);
    if needed > capacity {
        return Err(EnvError::EnvironmentTooLarge { needed, capacity });
    }

    let mut region = BytesMut::with_capacity(capacity);
    for (key, value) in map {
        region.put_slice(key.as_bytes());
        region.put_u8(SEPARATOR);
        region.put_slice(value.as_bytes());
        region.put_u8(NUL);
    }
    region.resize(capacity, NUL);

    Ok(region.freeze())
}

/// Reject entries whose bytes would not survive a decode
fn check_entry(key: &str, value: &str) -> Result<()> {
    let key_ok = !key.is_empty() && !key.bytes().any(|b| b == SEPARATOR || b == NUL);
    if !key_ok || value.bytes().any(|b| b == NUL) {
        return Err(EnvError::MalformedEntry(format!("{}={}", key, value)));
    }
    Ok(())
}
