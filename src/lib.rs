//! # flockdiary
//!
//! A single-device journal for pigeon and chicken keepers:
//! - Named groups of birds with per-bird color and breed
//! - Dated diary entries (mood, offspring count, notes) per group
//! - Derived statistics, time-window filters and an activity calendar
//! - Whole-collection JSON snapshots in a checksummed key-value store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front end (CLI / any UI)                    │
//! └──────────────┬─────────────────────────────▲────────────────┘
//!                │ add / update / delete       │ Change events
//!                ▼                             │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DiaryManager                           │
//! │        Vec<BirdGroup> + Vec<DiaryEntry> (in memory)         │
//! └──────────────┬─────────────────────────────┬────────────────┘
//!                │ after every mutation        │ read-only
//!                ▼                             ▼
//!         ┌─────────────┐              ┌─────────────┐
//!         │  Snapshot   │              │    Query    │
//!         │   (JSON)    │              │ filter/stats│
//!         └──────┬──────┘              └─────────────┘
//!                ▼
//!         ┌─────────────┐
//!         │   KvStore   │
//!         │ file / mem  │
//!         └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod snapshot;
pub mod events;
pub mod query;
pub mod manager;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DiaryError, Result};
pub use config::{Config, SyncStrategy};
pub use events::Change;
pub use manager::DiaryManager;
pub use model::{Bird, BirdGroup, DiaryEntry, Mood, Species};
pub use query::{EntryFilter, TimeWindow};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of flockdiary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
