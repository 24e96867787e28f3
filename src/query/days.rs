//! Calendar-day arithmetic in the user's time zone.
//!
//! Days are cut with the offset in force at each timestamp, so entries on
//! either side of a daylight-saving change land on the day the user saw.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::config::Config;
use crate::error::DiaryError;

/// Time zone used to cut timestamps into calendar days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiaryZone {
    /// System time zone, DST rules included
    #[default]
    Local,
    /// IANA zone such as `Europe/Berlin`
    Named(Tz),
    /// Constant offset, no DST
    Fixed(FixedOffset),
}

impl DiaryZone {
    pub fn utc() -> Self {
        DiaryZone::Named(Tz::UTC)
    }

    /// Wall-clock time of an instant
    pub fn local_time(&self, ts: DateTime<Utc>) -> NaiveDateTime {
        match self {
            DiaryZone::Local => ts.with_timezone(&Local).naive_local(),
            DiaryZone::Named(tz) => ts.with_timezone(tz).naive_local(),
            DiaryZone::Fixed(offset) => ts.with_timezone(offset).naive_local(),
        }
    }

    /// First instant at or after a wall-clock time
    ///
    /// Ambiguous times resolve to the earlier instant. Times inside a DST gap
    /// resolve to the end of the gap.
    pub fn instant_of(&self, local: NaiveDateTime) -> DateTime<Utc> {
        match self {
            DiaryZone::Local => resolve(&Local, local),
            DiaryZone::Named(tz) => resolve(tz, local),
            DiaryZone::Fixed(offset) => resolve(offset, local),
        }
    }
}

fn resolve<Z: TimeZone>(zone: &Z, local: NaiveDateTime) -> DateTime<Utc> {
    // Real gaps are whole multiples of 15 minutes and at most a few hours
    (0..=16)
        .map(|quarter| local + Duration::minutes(15 * quarter))
        .find_map(|t| zone.from_local_datetime(&t).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}

impl fmt::Display for DiaryZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiaryZone::Local => f.write_str("local"),
            DiaryZone::Named(tz) => f.write_str(tz.name()),
            DiaryZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parses "local" or an IANA zone name
impl FromStr for DiaryZone {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(DiaryZone::Local);
        }
        s.parse::<Tz>()
            .map(DiaryZone::Named)
            .map_err(|_| DiaryError::InvalidInput(format!("unknown time zone '{}'", s)))
    }
}

/// How timestamps map onto the user's calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRules {
    pub zone: DiaryZone,
    pub week_start: Weekday,
}

impl CalendarRules {
    pub fn new(zone: DiaryZone, week_start: Weekday) -> Self {
        Self { zone, week_start }
    }

    /// UTC days, weeks starting Sunday
    pub fn utc() -> Self {
        Self::new(DiaryZone::utc(), Weekday::Sun)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.time_zone, config.week_start)
    }

    /// Calendar day a timestamp falls on
    pub fn day_of(&self, ts: DateTime<Utc>) -> NaiveDate {
        self.zone.local_time(ts).date()
    }

    /// First instant of a calendar day
    pub fn start_of_day(&self, day: NaiveDate) -> DateTime<Utc> {
        self.zone.instant_of(day.and_time(NaiveTime::MIN))
    }

    /// First day of the week containing `day`
    pub fn week_start_day(&self, day: NaiveDate) -> NaiveDate {
        day - Duration::days(self.days_into_week(day.weekday()) as i64)
    }

    /// Position of a weekday in the configured week, 0-based
    pub fn days_into_week(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_sunday() + 7 - self.week_start.num_days_from_sunday()) % 7
    }

    /// Start of the week containing `now`
    pub fn start_of_week(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start_of_day(self.week_start_day(self.day_of(now)))
    }

    /// Start of the first of the month containing `now`
    pub fn start_of_month(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = self.day_of(now);
        self.start_of_day(today - Duration::days(today.day0() as i64))
    }

    pub fn same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.day_of(a) == self.day_of(b)
    }
}

impl Default for CalendarRules {
    fn default() -> Self {
        Self::utc()
    }
}
