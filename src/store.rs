//! Store Module
//!
//! The environment store: an in-memory mapping tied to a fixed-size backing
//! file.
//!
//! ## Responsibilities
//! - Create a backing file of a fixed size, or open and validate one
//! - Get/Set/Import against the in-memory mapping
//! - Save back in place without changing the file's length
//!
//! ## Write-back
//! `save` never deletes, renames or truncates the backing file. It opens the
//! existing file for writing and overwrites it from offset 0: CRC, padding,
//! entries region, then a sync. The file length is fixed, so no write can
//! grow it. The encoded region is complete and checked before the file is
//! opened; a save that fails on size leaves the old copy untouched.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, SyncStrategy};
use crate::error::{EnvError, Result};
use crate::import;
use crate::integrity;
use crate::layout::{self, EnvMap, CRC_SIZE};

/// An environment store bound to one backing file
///
/// Dropping a store performs no implicit save.
#[derive(Debug, Clone)]
pub struct Store {
    /// Backing file
    path: PathBuf,

    /// Total blob length, header included. Never changes.
    size: usize,

    /// Layout and durability settings
    config: Config,

    /// Current entries
    data: EnvMap,
}

impl Store {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a new empty store backed by a `size`-byte file at `path`
    pub fn create(path: impl AsRef<Path>, size: usize) -> Result<Self> {
        Self::create_with_config(path, size, Config::default())
    }

    /// Create a new empty store with an explicit config
    ///
    /// The backing file is created (or truncated) and zero-filled to `size`
    /// bytes. It holds no valid CRC until the first `save`.
    pub fn create_with_config(path: impl AsRef<Path>, size: usize, config: Config) -> Result<Self> {
        config.validate()?;
        if size < config.header_size {
            return Err(EnvError::InvalidSize {
                size,
                header_size: config.header_size,
            });
        }

        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        file.set_len(size as u64)?;
        file.sync_all()?;

        tracing::debug!("Created environment {} ({} bytes)", path.display(), size);

        Ok(Self {
            path,
            size,
            config,
            data: EnvMap::new(),
        })
    }

    /// Open and validate an existing store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, Config::default())
    }

    /// Open and validate an existing store with an explicit config
    ///
    /// The whole file is read; its length becomes the store size. The stored
    /// CRC must match the entries region or the open fails.
    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        config.validate()?;

        let path = path.as_ref().to_path_buf();
        let mut content = Vec::new();
        File::open(&path)?.read_to_end(&mut content)?;

        let header_size = config.header_size;
        let stored = match integrity::read_stored(&content) {
            Some(crc) if content.len() >= header_size => crc,
            _ => {
                return Err(EnvError::InvalidSize {
                    size: content.len(),
                    header_size,
                })
            }
        };

        let region = &content[header_size..];
        if !integrity::verify(stored, region) {
            let computed = integrity::checksum(region);
            tracing::warn!(
                "CRC mismatch in {}: stored {:#010x}, computed {:#010x}",
                path.display(),
                stored,
                computed
            );
            return Err(EnvError::Integrity { stored, computed });
        }

        let data = layout::decode(region)?;

        tracing::debug!(
            "Opened environment {} ({} bytes, {} entries)",
            path.display(),
            content.len(),
            data.len()
        );

        Ok(Self {
            path,
            size: content.len(),
            config,
            data,
        })
    }

    // =========================================================================
    // Key/Value Access
    // =========================================================================

    /// Current value for `key`, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Set `key` to `value`; an empty value unsets the key
    ///
    /// Never fails. A key that is empty or contains `=` or NUL, or a value
    /// containing NUL, is kept in memory but makes `save` fail with
    /// `MalformedEntry` until it is unset.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if value.is_empty() {
            self.data.remove(&key);
        } else {
            self.data.insert(key, value);
        }
    }

    /// Whether `key` is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Import `key=value` lines from `reader`
    ///
    /// Stops at the first invalid line; lines applied before it are kept.
    pub fn import<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let applied = import::import_into(&mut self.data, reader)?;
        tracing::debug!("Imported {} entries into {}", applied, self.path.display());
        Ok(())
    }

    /// `key=value` listing, one entry per line, for diagnostics
    pub fn render(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total blob size in bytes, header included
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes available for entries (size minus header)
    pub fn capacity(&self) -> usize {
        self.size - self.config.header_size
    }

    /// Bytes the current entries would occupy, without zero fill
    pub fn used_bytes(&self) -> usize {
        layout::encoded_len(&self.data)
    }

    /// Config this store was created or opened with
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the environment back to its backing file in place
    pub fn save(&self) -> Result<()> {
        // Encode fully before touching the file
        let region = layout::encode(&self.data, self.capacity())?;
        let crc = integrity::checksum(&region);
        let padding = vec![0u8; self.config.header_size - CRC_SIZE];

        // Existing file only: no create, no truncate
        let mut file = OpenOptions::new().write(true).open(&self.path)?;

        let actual = file.metadata()?.len();
        if actual != self.size as u64 {
            return Err(EnvError::SizeMismatch {
                expected: self.size as u64,
                actual,
            });
        }

        file.write_all(&crc.to_le_bytes())?;
        file.write_all(&padding)?;
        file.write_all(&region)?;

        match self.config.sync_strategy {
            SyncStrategy::All => file.sync_all()?,
            SyncStrategy::Data => file.sync_data()?,
        }

        tracing::debug!(
            "Saved environment {} ({} entries, {}/{} bytes used, crc {:#010x})",
            self.path.display(),
            self.data.len(),
            self.used_bytes(),
            self.capacity(),
            crc
        );

        Ok(())
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.data {
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
