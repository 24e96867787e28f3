//! Model Module
//!
//! Plain records for everything the diary stores.
//!
//! ## Ownership
//! ```text
//! DiaryManager
//!   ├── Vec<BirdGroup>
//!   │     └── Vec<Bird>        (birds only exist inside a group)
//!   └── Vec<DiaryEntry>
//!         └── group_id ──────► BirdGroup.id   (not enforced by default)
//! ```
//!
//! All records serialize with camelCase field names, RFC 3339 timestamps and
//! UUID strings. This is the on-disk JSON format.

mod bird;
mod entry;
mod group;
mod mood;
mod species;

pub use bird::Bird;
pub use entry::DiaryEntry;
pub use group::BirdGroup;
pub use mood::Mood;
pub use species::Species;
