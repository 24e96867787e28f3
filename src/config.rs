//! Configuration for flockdiary
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use chrono::{FixedOffset, Weekday};

use crate::model::Species;
use crate::query::DiaryZone;

/// Main configuration for a diary instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the slot files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── PigeonGroups.slot   (or ChickenGroups.slot)
    ///     └── DiaryEntries.slot
    pub data_dir: PathBuf,

    /// When to fsync slot files
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Domain Configuration
    // -------------------------------------------------------------------------
    /// Which app variant this diary belongs to
    pub species: Species,

    /// Reject diary entries that point at a group the manager doesn't know
    pub strict_group_refs: bool,

    // -------------------------------------------------------------------------
    // Calendar Configuration
    // -------------------------------------------------------------------------
    /// Time zone used to cut timestamps into calendar days
    pub time_zone: DiaryZone,

    /// First day of the week for "this week" filters and the calendar grid
    pub week_start: Weekday,
}

/// Slot file sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync every slot write before it is renamed into place
    EveryWrite,

    /// Leave flushing to the OS
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./flockdiary_data"),
            sync_strategy: SyncStrategy::EveryWrite,
            species: Species::Pigeon,
            strict_group_refs: false,
            time_zone: DiaryZone::Local,
            week_start: Weekday::Sun,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all slot files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the slot sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the app variant
    pub fn species(mut self, species: Species) -> Self {
        self.config.species = species;
        self
    }

    /// Enable or disable group validation on new diary entries
    pub fn strict_group_refs(mut self, strict: bool) -> Self {
        self.config.strict_group_refs = strict;
        self
    }

    /// Set the time zone used for calendar-day truncation
    pub fn time_zone(mut self, zone: DiaryZone) -> Self {
        self.config.time_zone = zone;
        self
    }

    /// Cut calendar days at a constant offset instead of a time zone
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.config.time_zone = DiaryZone::Fixed(offset);
        self
    }

    /// Set the first day of the week
    pub fn week_start(mut self, day: Weekday) -> Self {
        self.config.week_start = day;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
