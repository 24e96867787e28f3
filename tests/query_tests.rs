//! Tests for entry filtering and the activity calendar
//!
//! These tests verify:
//! - Time windows (today / this week / this month / all)
//! - Group filter intersecting with time windows
//! - Newest-first ordering of results
//! - Calendar grid marks for days with entries

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use flockdiary::query::{CalendarRules, DiaryZone, MonthCursor};
use flockdiary::store::MemoryStore;
use flockdiary::{BirdGroup, Config, DiaryEntry, DiaryManager, EntryFilter, Mood, TimeWindow};
use uuid::Uuid;

// =============================================================================
// Helper Functions
// =============================================================================

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// Thursday afternoon, weeks start on Sunday 2024-03-10
fn now() -> DateTime<Utc> {
    at("2024-03-14T15:00:00Z")
}

fn setup_manager(week_start: Weekday) -> DiaryManager {
    let config = Config::builder()
        .utc_offset(FixedOffset::east_opt(0).unwrap())
        .week_start(week_start)
        .build();
    DiaryManager::with_store(config, Arc::new(MemoryStore::new()))
}

fn add_group(manager: &mut DiaryManager, name: &str) -> Uuid {
    let group = BirdGroup::new(name);
    let id = group.id;
    manager.add_group(group).unwrap();
    id
}

fn add_entry(manager: &mut DiaryManager, group_id: Uuid, date: DateTime<Utc>) -> Uuid {
    let entry = DiaryEntry::recorded_at(group_id, Mood::Happy, 1, "", date);
    let id = entry.id;
    manager.add_diary_entry(entry).unwrap();
    id
}

fn ids(entries: &[&DiaryEntry]) -> Vec<Uuid> {
    entries.iter().map(|e| e.id).collect()
}

// =============================================================================
// Time Window Tests
// =============================================================================

#[test]
fn test_windows_over_today_three_and_forty_days_ago() {
    let mut manager = setup_manager(Weekday::Sun);
    let group = add_group(&mut manager, "Loft");

    let today = add_entry(&mut manager, group, now() - Duration::hours(2));
    let three_days = add_entry(&mut manager, group, now() - Duration::days(3));
    let forty_days = add_entry(&mut manager, group, now() - Duration::days(40));

    let all = manager.filter_entries(&EntryFilter::new(TimeWindow::All), now());
    assert_eq!(ids(&all), vec![today, three_days, forty_days]);

    let day = manager.filter_entries(&EntryFilter::new(TimeWindow::Today), now());
    assert_eq!(ids(&day), vec![today]);

    // Week starts Sunday 2024-03-10; three days ago is Monday 2024-03-11
    let week = manager.filter_entries(&EntryFilter::new(TimeWindow::ThisWeek), now());
    assert_eq!(ids(&week), vec![today, three_days]);

    let month = manager.filter_entries(&EntryFilter::new(TimeWindow::ThisMonth), now());
    assert_eq!(ids(&month), vec![today, three_days]);
}

#[test]
fn test_this_week_boundary_is_inclusive() {
    let mut manager = setup_manager(Weekday::Sun);
    let group = add_group(&mut manager, "Loft");

    let at_start = add_entry(&mut manager, group, at("2024-03-10T00:00:00Z"));
    add_entry(&mut manager, group, at("2024-03-09T23:59:59Z"));

    let week = manager.filter_entries(&EntryFilter::new(TimeWindow::ThisWeek), now());
    assert_eq!(ids(&week), vec![at_start]);
}

#[test]
fn test_week_start_is_configurable() {
    let mut sunday = setup_manager(Weekday::Sun);
    let mut monday = setup_manager(Weekday::Mon);

    let g1 = add_group(&mut sunday, "Loft");
    let g2 = add_group(&mut monday, "Loft");
    let sunday_entry = at("2024-03-10T09:00:00Z");
    add_entry(&mut sunday, g1, sunday_entry);
    add_entry(&mut monday, g2, sunday_entry);

    let filter = EntryFilter::new(TimeWindow::ThisWeek);
    assert_eq!(sunday.filter_entries(&filter, now()).len(), 1);
    assert_eq!(monday.filter_entries(&filter, now()).len(), 0);
}

#[test]
fn test_future_dated_entries_count_as_this_week() {
    let mut manager = setup_manager(Weekday::Sun);
    let group = add_group(&mut manager, "Loft");

    let later = add_entry(&mut manager, group, now() + Duration::days(30));

    let week = manager.filter_entries(&EntryFilter::new(TimeWindow::ThisWeek), now());
    assert_eq!(ids(&week), vec![later]);

    let day = manager.filter_entries(&EntryFilter::new(TimeWindow::Today), now());
    assert!(day.is_empty());
}

#[test]
fn test_today_uses_configured_offset() {
    // 23:30 UTC on the 13th is already the 14th at +02:00
    let config = Config::builder()
        .utc_offset(FixedOffset::east_opt(2 * 3600).unwrap())
        .build();
    let mut manager = DiaryManager::with_store(config, Arc::new(MemoryStore::new()));
    let group = add_group(&mut manager, "Loft");
    let late = add_entry(&mut manager, group, at("2024-03-13T23:30:00Z"));

    let day = manager.filter_entries(&EntryFilter::new(TimeWindow::Today), now());
    assert_eq!(ids(&day), vec![late]);
}

#[test]
fn test_days_follow_dst_in_named_zone() {
    let config = Config::builder()
        .time_zone(DiaryZone::Named(Tz::Europe__Berlin))
        .build();
    let mut manager = DiaryManager::with_store(config, Arc::new(MemoryStore::new()));
    let group = add_group(&mut manager, "Loft");

    // 23:30 local in winter (+01:00) and 00:30 local in summer (+02:00)
    let winter = add_entry(&mut manager, group, at("2024-01-15T22:30:00Z"));
    add_entry(&mut manager, group, at("2024-07-15T22:30:00Z"));

    let days: Vec<NaiveDate> = manager.days_with_entries().into_iter().collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 16).unwrap(),
        ]
    );

    // Seen from summer, the winter entry still belongs to its own evening
    let winter_evening = at("2024-01-15T20:00:00Z");
    let day = manager.filter_entries(&EntryFilter::new(TimeWindow::Today), winter_evening);
    assert_eq!(ids(&day), vec![winter]);
}

// =============================================================================
// Group Filter Tests
// =============================================================================

#[test]
fn test_group_filter_intersects_window() {
    let mut manager = setup_manager(Weekday::Sun);
    let a = add_group(&mut manager, "A");
    let b = add_group(&mut manager, "B");

    let a_today = add_entry(&mut manager, a, now() - Duration::hours(1));
    add_entry(&mut manager, a, now() - Duration::days(40));
    add_entry(&mut manager, b, now() - Duration::hours(1));

    let filter = EntryFilter::new(TimeWindow::Today).in_group(a);
    let result = manager.filter_entries(&filter, now());
    assert_eq!(ids(&result), vec![a_today]);

    let all_a = manager.filter_entries(&EntryFilter::new(TimeWindow::All).in_group(a), now());
    assert_eq!(all_a.len(), 2);
    assert!(all_a.iter().all(|e| e.group_id == a));
}

#[test]
fn test_group_filter_for_unknown_group_is_empty() {
    let mut manager = setup_manager(Weekday::Sun);
    let a = add_group(&mut manager, "A");
    add_entry(&mut manager, a, now());

    let filter = EntryFilter::default().in_group(Uuid::new_v4());
    assert!(manager.filter_entries(&filter, now()).is_empty());
}

#[test]
fn test_window_parsing_and_messages() {
    assert_eq!("this-week".parse::<TimeWindow>().unwrap(), TimeWindow::ThisWeek);
    assert_eq!("This Month".parse::<TimeWindow>().unwrap(), TimeWindow::ThisMonth);
    assert_eq!("today".parse::<TimeWindow>().unwrap(), TimeWindow::Today);
    assert!("yesterday".parse::<TimeWindow>().is_err());

    assert_eq!(TimeWindow::All.empty_message(), "No diary entries yet!");
    assert_eq!(TimeWindow::Today.empty_message(), "No entries for today");
}

// =============================================================================
// Calendar Tests
// =============================================================================

#[test]
fn test_calendar_marks_days_with_entries() {
    let mut manager = setup_manager(Weekday::Sun);
    let group = add_group(&mut manager, "Loft");
    add_entry(&mut manager, group, at("2024-03-06T10:00:00Z"));
    add_entry(&mut manager, group, at("2024-03-06T18:00:00Z"));
    add_entry(&mut manager, group, at("2024-03-21T10:00:00Z"));
    // Shown as padding in the March grid, but not counted as active
    add_entry(&mut manager, group, at("2024-02-27T10:00:00Z"));

    let month = manager.calendar_month(MonthCursor::new(2024, 3).unwrap());

    let marked: Vec<NaiveDate> = month
        .days
        .iter()
        .filter(|d| d.has_entry)
        .map(|d| d.date)
        .collect();
    assert_eq!(
        marked,
        vec![
            NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 21).unwrap(),
        ]
    );
    assert_eq!(month.active_day_count(), 2);
    assert_eq!(month.weeks().count(), 6);
}

#[test]
fn test_calendar_rules_from_config() {
    let config = Config::builder()
        .utc_offset(FixedOffset::west_opt(5 * 3600).unwrap())
        .week_start(Weekday::Mon)
        .build();
    let rules = CalendarRules::from_config(&config);

    assert_eq!(rules.week_start, Weekday::Mon);
    assert_eq!(
        rules.zone,
        DiaryZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())
    );
    assert_eq!(
        rules.day_of(at("2024-03-14T03:00:00Z")),
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
    );
}
