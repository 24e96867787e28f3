//! File Store
//!
//! One framed file per slot inside a data directory.
//!
//! ## Responsibilities
//! - Create the data directory on open
//! - Map keys to `{data_dir}/{key}.slot`
//! - Replace slot files atomically (write temp, then rename)
//! - Verify frames on read

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::config::SyncStrategy;
use crate::error::{DiaryError, Result};

use super::{decode_frame, encode_frame, KvStore};

/// Directory-backed key-value store
///
/// ## Concurrency:
/// - Reads take no lock; a rename is atomic so readers see old or new file
/// - Writes are serialized by `write_lock` so two writers never share a
///   temp file
pub struct FileStore {
    /// Directory holding the slot files
    data_dir: PathBuf,

    /// When to fsync
    sync_strategy: SyncStrategy,

    /// Serializes put operations
    write_lock: Mutex<()>,
}

impl FileStore {
    const SLOT_EXTENSION: &'static str = "slot";
    const TEMP_EXTENSION: &'static str = "slot.tmp";

    /// Open or create a store in the given directory
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        fs::create_dir_all(path)?;

        debug!(dir = %path.display(), ?sync_strategy, "opened file store");

        Ok(Self {
            data_dir: path.to_path_buf(),
            sync_strategy,
            write_lock: Mutex::new(()),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing a key
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self
            .data_dir
            .join(format!("{}.{}", key, Self::SLOT_EXTENSION)))
    }

    /// List keys that currently have a slot file
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            let file_path = entry.path();

            if file_path.is_file() {
                if let Some(key) = Self::parse_slot_key(&file_path) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Keys become file names, so keep them to a safe alphabet
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(())
        } else {
            Err(DiaryError::InvalidInput(format!("invalid slot key '{}'", key)))
        }
    }

    /// "DiaryEntries.slot" → Some("DiaryEntries")
    fn parse_slot_key(path: &Path) -> Option<String> {
        if path.extension()?.to_str()? != Self::SLOT_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        Self::validate_key(stem).ok()?;
        Some(stem.to_string())
    }

    fn write_temp(&self, temp: &Path, frame: &[u8]) -> io::Result<()> {
        let mut file = File::create(temp)?;
        file.write_all(frame)?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", key, Self::TEMP_EXTENSION))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let path = self.slot_path(key)?;

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let payload = decode_frame(Bytes::from(raw)).map_err(|e| {
            DiaryError::Storage(format!("slot '{}' unreadable: {}", key, e))
        })?;

        Ok(Some(payload))
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        let path = self.slot_path(key)?;
        let frame = encode_frame(&value)?;

        let _write_guard = self.write_lock.lock();

        // Write the full frame next to the live file, then swap it in
        let temp = self.temp_path(key);
        let written = self
            .write_temp(&temp, &frame)
            .and_then(|()| fs::rename(&temp, &path));

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    warn!(key, error = %cleanup, "could not remove temp slot file");
                }
            }
            return Err(e.into());
        }

        debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }
}
