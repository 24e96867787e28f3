//! Query Module
//!
//! Read-only derivations over the entry collection.
//!
//! ## Responsibilities
//! - Cut timestamps into calendar days, weeks and months
//! - Filter entries by time window and group
//! - Aggregate statistics (offspring totals, average mood)
//! - Lay out the month grid of the activity calendar
//!
//! Nothing in here mutates or persists. Functions take entry slices so they
//! work the same on the whole diary or on one group's entries.

mod calendar;
mod days;
mod filter;
mod stats;

pub use calendar::{CalendarDay, CalendarMonth, MonthCursor};
pub use days::{CalendarRules, DiaryZone};
pub use filter::{EntryFilter, TimeWindow};
pub use stats::{average_mood, days_with_entries, total_offspring, GroupStats, Summary};
