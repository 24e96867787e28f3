//! Activity calendar month grid
//!
//! ```text
//!  Su Mo Tu We Th Fr Sa
//!  25 26 27 28 29  1  2    ← leading days from the previous month
//!   3  4  5 [6] 7  8  9    ← [n] = at least one entry that day
//!  ...
//! ```
//!
//! The grid is always 6 weeks long so the layout doesn't jump between months.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::error::{DiaryError, Result};

use super::CalendarRules;

/// Days shown per calendar page
pub const GRID_DAYS: usize = 6 * 7;

/// A month being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| DiaryError::InvalidInput(format!("invalid month {}-{:02}", year, month)))
    }

    /// Month containing a given day
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            first: day - Duration::days(day.day0() as i64),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Previous month; stays put at the edge of the representable range
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Next month; stays put at the edge of the representable range
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year() && day.month() == self.month()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

/// Parses "YYYY-MM"
impl FromStr for MonthCursor {
    type Err = DiaryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || DiaryError::InvalidInput(format!("expected YYYY-MM, got '{}'", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the padding days of neighbouring months
    pub in_month: bool,
    pub has_entry: bool,
}

/// A laid-out month page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub cursor: MonthCursor,
    pub week_start: Weekday,
    /// Always `GRID_DAYS` long, row-major
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Build the grid for `cursor`, marking days found in `active_days`
    pub fn build(cursor: MonthCursor, rules: &CalendarRules, active_days: &BTreeSet<NaiveDate>) -> Self {
        let first = cursor.first_day();
        let lead = rules.days_into_week(first.weekday());
        let start = first - Duration::days(lead as i64);

        let days = start
            .iter_days()
            .take(GRID_DAYS)
            .map(|date| CalendarDay {
                date,
                in_month: cursor.contains(date),
                has_entry: active_days.contains(&date),
            })
            .collect();

        Self {
            cursor,
            week_start: rules.week_start,
            days,
        }
    }

    /// Grid rows, one per week
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Number of days in the displayed month that have entries
    pub fn active_day_count(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.in_month && day.has_entry)
            .count()
    }

    /// Short weekday headers in grid order ("Su", "Mo", ...)
    pub fn weekday_headers(&self) -> Vec<&'static str> {
        const NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
        let offset = self.week_start.num_days_from_sunday() as usize;
        (0..7).map(|i| NAMES[(offset + i) % 7]).collect()
    }
}
