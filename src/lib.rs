//! # uenv
//!
//! Reader and writer for fixed-size, CRC-protected key/value environment
//! blobs (U-Boot style firmware configuration storage):
//! - Byte-exact layout: CRC32 header, NUL-terminated `key=value` entries,
//!   zero fill
//! - CRC validation on open
//! - In-place save that never changes the file's size
//! - Import from `key=value` text
//!
//! ## Architecture Overview
//!
//! ```text
//!   ┌──────────────┐   key=value lines   ┌──────────────┐
//!   │    Import    │ ──────────────────▶ │    Store     │
//!   └──────────────┘                     │ (get / set)  │
//!                                        └──────┬───────┘
//!                          open / save          │
//!                 ┌─────────────────────────────┴──────┐
//!                 ▼                                    ▼
//!          ┌─────────────┐                      ┌─────────────┐
//!          │   Layout    │                      │  Integrity  │
//!          │   (codec)   │                      │   (CRC32)   │
//!          └─────────────┘                      └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use uenv::Store;
//!
//! let mut env = Store::create("uboot.env", 0x4000)?;
//! env.set("bootdelay", "3");
//! env.save()?;
//!
//! let env = Store::open("uboot.env")?;
//! assert_eq!(env.get("bootdelay"), Some("3"));
//! # Ok::<(), uenv::EnvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod integrity;
pub mod layout;
pub mod import;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EnvError, Result};
pub use config::{Config, SyncStrategy};
pub use layout::EnvMap;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of uenv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
