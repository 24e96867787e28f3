//! Time-window and group filtering of diary entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DiaryError;
use crate::model::DiaryEntry;

use super::CalendarRules;

/// Time window an entry list can be narrowed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    #[default]
    All,
    /// Same calendar day as now
    Today,
    /// On or after the start of the current week
    ThisWeek,
    /// On or after the first of the current month
    ThisMonth,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::All,
        TimeWindow::Today,
        TimeWindow::ThisWeek,
        TimeWindow::ThisMonth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TimeWindow::All => "All",
            TimeWindow::Today => "Today",
            TimeWindow::ThisWeek => "This Week",
            TimeWindow::ThisMonth => "This Month",
        }
    }

    /// Message to show when the window holds no entries
    pub fn empty_message(self) -> &'static str {
        match self {
            TimeWindow::All => "No diary entries yet!",
            TimeWindow::Today => "No entries for today",
            TimeWindow::ThisWeek => "No entries this week",
            TimeWindow::ThisMonth => "No entries this month",
        }
    }

    /// Whether an entry dated `date` falls in the window as seen at `now`
    pub fn contains(self, date: DateTime<Utc>, now: DateTime<Utc>, rules: &CalendarRules) -> bool {
        match self {
            TimeWindow::All => true,
            TimeWindow::Today => rules.same_day(date, now),
            TimeWindow::ThisWeek => date >= rules.start_of_week(now),
            TimeWindow::ThisMonth => date >= rules.start_of_month(now),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for TimeWindow {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "all" => Ok(TimeWindow::All),
            "today" => Ok(TimeWindow::Today),
            "this-week" | "week" => Ok(TimeWindow::ThisWeek),
            "this-month" | "month" => Ok(TimeWindow::ThisMonth),
            _ => Err(DiaryError::InvalidInput(format!(
                "unknown filter '{}', expected all, today, this-week or this-month",
                s
            ))),
        }
    }
}

/// Time window plus optional group restriction
///
/// The two parts are independent and intersect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub window: TimeWindow,
    pub group_id: Option<Uuid>,
}

impl EntryFilter {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            group_id: None,
        }
    }

    pub fn in_group(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn matches(&self, entry: &DiaryEntry, now: DateTime<Utc>, rules: &CalendarRules) -> bool {
        if let Some(group_id) = self.group_id {
            if entry.group_id != group_id {
                return false;
            }
        }
        self.window.contains(entry.date, now, rules)
    }

    /// Matching entries, most recent first
    pub fn apply<'a>(
        &self,
        entries: &'a [DiaryEntry],
        now: DateTime<Utc>,
        rules: &CalendarRules,
    ) -> Vec<&'a DiaryEntry> {
        let mut matched: Vec<&DiaryEntry> = entries
            .iter()
            .filter(|entry| self.matches(entry, now, rules))
            .collect();
        sort_newest_first(&mut matched);
        matched
    }
}

/// Stable sort by date, descending
pub(crate) fn sort_newest_first(entries: &mut [&DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
