//! Snapshot glue between the manager and a key-value store
//!
//! Each collection is encoded as one JSON array and written to its own slot.
//! There is no versioning and no partial update: every save rewrites both
//! slots, every load reads both slots.
//!
//! Loading never fails. A slot that is missing, unreadable, or not valid JSON
//! for the expected type loads as an empty collection.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{BirdGroup, DiaryEntry, Species};
use crate::store::KvStore;

/// Slot holding the diary entry collection
pub const ENTRIES_KEY: &str = "DiaryEntries";

/// Both collections as loaded from a store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub groups: Vec<BirdGroup>,
    pub entries: Vec<DiaryEntry>,
}

impl Snapshot {
    /// Read both collections, degrading each to empty on any failure
    pub fn load(store: &dyn KvStore, species: Species) -> Self {
        Self {
            groups: load_collection(store, species.groups_key()),
            entries: load_collection(store, ENTRIES_KEY),
        }
    }

    /// Write both collections, entries first
    ///
    /// If the second write fails the store may hold a group without its
    /// entries, but never entries whose group has already been removed.
    pub fn save(
        store: &dyn KvStore,
        species: Species,
        groups: &[BirdGroup],
        entries: &[DiaryEntry],
    ) -> Result<()> {
        save_collection(store, ENTRIES_KEY, entries)?;
        save_collection(store, species.groups_key(), groups)?;
        Ok(())
    }
}

/// Encode a collection as a JSON array
pub fn encode_collection<T: Serialize>(items: &[T]) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(items)?))
}

/// Decode a JSON array into a collection
pub fn decode_collection<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    Ok(serde_json::from_slice(bytes)?)
}

fn load_collection<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Vec<T> {
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(key, "slot empty, starting with no records");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "could not read slot, starting with no records");
            return Vec::new();
        }
    };

    match decode_collection(&bytes) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "could not decode slot, starting with no records");
            Vec::new()
        }
    }
}

fn save_collection<T: Serialize>(store: &dyn KvStore, key: &str, items: &[T]) -> Result<()> {
    let bytes = encode_collection(items)?;
    store.put(key, bytes)
}
