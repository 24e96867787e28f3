//! In-memory store
//!
//! HashMap-based store with RwLock, for tests and embedding.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::Result;

use super::KvStore;

/// Volatile key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots written so far
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        // Bytes clones are refcount bumps
        Ok(self.slots.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        self.slots.write().insert(key.to_string(), value);
        Ok(())
    }
}
