//! Manager Module
//!
//! The diary's single source of truth.
//!
//! ## Responsibilities
//! - Load both collections once at construction
//! - Apply create/update/delete operations in memory
//! - Re-serialize everything to the store after every effective mutation
//! - Publish a change event so front ends can re-render
//! - Answer read-only queries (filters, statistics, calendar)

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use crossbeam::channel::Receiver;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{DiaryError, Result};
use crate::events::{Change, ChangeFeed};
use crate::model::{Bird, BirdGroup, DiaryEntry, Mood, Species};
use crate::query::{
    self, CalendarMonth, CalendarRules, EntryFilter, GroupStats, MonthCursor, Summary,
};
use crate::snapshot::Snapshot;
use crate::store::{FileStore, KvStore};

/// Name shown for entries whose group no longer exists
pub const UNKNOWN_GROUP_NAME: &str = "Unknown Group";

/// In-memory diary backed by a key-value store
///
/// ## Ownership Model
///
/// - Mutations take `&mut self`: one logical owner, no locking needed
/// - Queries take `&self` and never touch the store
/// - Every mutating call finishes its store write before it returns
///
/// Unknown ids on update/delete are silent no-ops: nothing is written and
/// nothing is published.
pub struct DiaryManager {
    /// Diary configuration
    config: Config,

    /// Calendar rules derived from config
    rules: CalendarRules,

    /// Where snapshots go
    store: Arc<dyn KvStore>,

    /// Groups in insertion order
    groups: Vec<BirdGroup>,

    /// Entries in insertion order
    entries: Vec<DiaryEntry>,

    /// Subscribers waiting for changes
    feed: ChangeFeed,
}

impl DiaryManager {
    /// Open a diary backed by slot files under `config.data_dir`
    pub fn open(config: Config) -> Result<Self> {
        let store = FileStore::open(&config.data_dir, config.sync_strategy)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Open a diary over any store
    ///
    /// Never fails: unreadable slots load as empty collections.
    pub fn with_store(config: Config, store: Arc<dyn KvStore>) -> Self {
        let Snapshot { groups, entries } = Snapshot::load(store.as_ref(), config.species);

        info!(
            species = %config.species,
            groups = groups.len(),
            entries = entries.len(),
            "diary loaded"
        );

        Self {
            rules: CalendarRules::from_config(&config),
            config,
            store,
            groups,
            entries,
            feed: ChangeFeed::new(),
        }
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Append a group. Duplicate names are allowed.
    pub fn add_group(&mut self, group: BirdGroup) -> Result<()> {
        let group_id = group.id;
        debug!(%group_id, name = %group.name, "adding group");

        self.groups.push(group);
        self.commit(Change::GroupAdded { group_id })
    }

    /// Replace the group with the same id; no-op if there is none
    pub fn update_group(&mut self, group: BirdGroup) -> Result<()> {
        let group_id = group.id;

        let Some(slot) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            debug!(%group_id, "update for unknown group ignored");
            return Ok(());
        };

        *slot = group;
        self.commit(Change::GroupUpdated { group_id })
    }

    /// Remove a group and every entry that references it
    ///
    /// Both removals happen before the single store write, so no observer
    /// ever sees the group gone with its entries still present.
    pub fn delete_group(&mut self, group_id: Uuid) -> Result<()> {
        let groups_before = self.groups.len();
        self.groups.retain(|g| g.id != group_id);

        if self.groups.len() == groups_before {
            debug!(%group_id, "delete for unknown group ignored");
            return Ok(());
        }

        let entries_before = self.entries.len();
        self.entries.retain(|e| e.group_id != group_id);
        let entries_removed = entries_before - self.entries.len();

        debug!(%group_id, entries_removed, "group deleted");
        self.commit(Change::GroupDeleted {
            group_id,
            entries_removed,
        })
    }

    /// Append a bird to a group; no-op if the group doesn't exist
    pub fn add_bird_to_group(&mut self, bird: Bird, group_id: Uuid) -> Result<()> {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            debug!(%group_id, "bird for unknown group ignored");
            return Ok(());
        };

        let bird_id = bird.id;
        debug!(%group_id, %bird_id, name = %bird.name, "adding bird");

        group.birds.push(bird);
        self.commit(Change::BirdAdded { group_id, bird_id })
    }

    // =========================================================================
    // Diary Entries
    // =========================================================================

    /// Append a diary entry
    ///
    /// The group reference is trusted unless `strict_group_refs` is set, in
    /// which case an unknown group is rejected with `DiaryError::UnknownGroup`.
    pub fn add_diary_entry(&mut self, entry: DiaryEntry) -> Result<()> {
        let entry_id = entry.id;
        let group_id = entry.group_id;

        if self.config.strict_group_refs && self.group(group_id).is_none() {
            return Err(DiaryError::UnknownGroup(group_id));
        }

        debug!(%entry_id, %group_id, mood = %entry.mood, "adding diary entry");

        self.entries.push(entry);
        self.commit(Change::EntryAdded { entry_id, group_id })
    }

    /// Remove a diary entry; no-op if absent
    pub fn delete_diary_entry(&mut self, entry_id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != entry_id);

        if self.entries.len() == before {
            debug!(%entry_id, "delete for unknown entry ignored");
            return Ok(());
        }

        self.commit(Change::EntryDeleted { entry_id })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// A group's entries, most recent first
    pub fn entries_for_group(&self, group_id: Uuid) -> Vec<&DiaryEntry> {
        EntryFilter::default()
            .in_group(group_id)
            .apply(&self.entries, Utc::now(), &self.rules)
    }

    /// Entries matching a filter as seen at `now`, most recent first
    pub fn filter_entries(&self, filter: &EntryFilter, now: DateTime<Utc>) -> Vec<&DiaryEntry> {
        filter.apply(&self.entries, now, &self.rules)
    }

    pub fn total_offspring(&self) -> u64 {
        query::total_offspring(&self.entries)
    }

    pub fn average_mood(&self) -> Mood {
        query::average_mood(&self.entries)
    }

    pub fn days_with_entries(&self) -> BTreeSet<NaiveDate> {
        query::days_with_entries(&self.entries, &self.rules)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.groups, &self.entries)
    }

    /// Statistics for one group, `None` if it doesn't exist
    pub fn group_stats(&self, group_id: Uuid) -> Option<GroupStats> {
        self.group(group_id)
            .map(|group| GroupStats::compute(group, &self.entries))
    }

    /// Statistics for every group, in group order
    pub fn all_group_stats(&self) -> Vec<GroupStats> {
        self.groups
            .iter()
            .map(|group| GroupStats::compute(group, &self.entries))
            .collect()
    }

    /// Activity calendar page for a month
    pub fn calendar_month(&self, cursor: MonthCursor) -> CalendarMonth {
        CalendarMonth::build(cursor, &self.rules, &self.days_with_entries())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn groups(&self) -> &[BirdGroup] {
        &self.groups
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn group(&self, group_id: Uuid) -> Option<&BirdGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn entry(&self, entry_id: Uuid) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// Group name for display, with a placeholder for dangling references
    pub fn group_name_or_placeholder(&self, group_id: Uuid) -> &str {
        self.group(group_id)
            .map(|g| g.name.as_str())
            .unwrap_or(UNKNOWN_GROUP_NAME)
    }

    /// Receive a `Change` after every effective mutation
    pub fn subscribe(&self) -> Receiver<Change> {
        self.feed.subscribe()
    }

    pub fn species(&self) -> Species {
        self.config.species
    }

    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Persist everything, then tell subscribers
    ///
    /// Subscribers are notified even if the write fails: they mirror the
    /// in-memory state, which has already changed.
    fn commit(&self, change: Change) -> Result<()> {
        let persisted = Snapshot::save(
            self.store.as_ref(),
            self.config.species,
            &self.groups,
            &self.entries,
        );
        self.feed.publish(change);
        persisted
    }
}
