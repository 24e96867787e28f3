//! Store Module
//!
//! Key-value byte store the diary persists into.
//!
//! ## Responsibilities
//! - Hold one opaque value per key ("slot")
//! - Replace a slot's value as a whole, never partially
//! - Report missing slots as `None`
//!
//! The diary only ever uses two slots (groups, entries). What the bytes mean
//! is the snapshot layer's business, not the store's.
//!
//! ## Slot File Format (FileStore)
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                      │
//! │ ┌──────────┬───────────┬──────────┬──────────────────┐ │
//! │ │Magic (4) │Version (2)│ CRC32 (4)│ Payload Len (4)  │ │
//! │ └──────────┴───────────┴──────────┴──────────────────┘ │
//! ├────────────────────────────────────────────────────────┤
//! │ Payload (Payload Len bytes)                            │
//! └────────────────────────────────────────────────────────┘
//! ```

mod file;
mod frame;
mod memory;

use bytes::Bytes;

use crate::error::Result;

pub use file::FileStore;
pub use frame::{decode_frame, encode_frame, HEADER_SIZE, MAGIC, VERSION};
pub use memory::MemoryStore;

/// Whole-value key-value store
///
/// Implementations use interior mutability so a store can sit behind an
/// `Arc` and be shared between a manager and whoever else needs to look at
/// the raw slots.
pub trait KvStore: Send + Sync {
    /// Read a slot. `Ok(None)` if it has never been written.
    fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Replace a slot's value
    fn put(&self, key: &str, value: Bytes) -> Result<()>;
}
