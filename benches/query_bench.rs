//! Benchmarks for diary queries

use std::sync::Arc;

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flockdiary::query::MonthCursor;
use flockdiary::snapshot::Snapshot;
use flockdiary::store::MemoryStore;
use flockdiary::{BirdGroup, Config, DiaryEntry, DiaryManager, EntryFilter, Mood, TimeWindow};

const GROUPS: usize = 20;
const ENTRIES: usize = 5_000;

fn populated_manager() -> DiaryManager {
    let config = Config::default();
    let store = Arc::new(MemoryStore::new());
    let now = Utc::now();

    let groups: Vec<BirdGroup> = (0..GROUPS)
        .map(|i| BirdGroup::new(format!("Loft {}", i)))
        .collect();

    let entries: Vec<DiaryEntry> = (0..ENTRIES)
        .map(|i| {
            DiaryEntry::recorded_at(
                groups[i % GROUPS].id,
                Mood::ALL[i % Mood::ALL.len()],
                (i % 4) as u32,
                "",
                now - Duration::hours(i as i64 * 3),
            )
        })
        .collect();

    // Seed the store directly; adding one by one rewrites the slot each time
    Snapshot::save(store.as_ref(), config.species, &groups, &entries).unwrap();
    DiaryManager::with_store(config, store)
}

fn query_benchmarks(c: &mut Criterion) {
    let manager = populated_manager();
    let now = Utc::now();
    let group_id = manager.groups()[0].id;

    c.bench_function("filter_this_month", |b| {
        let filter = EntryFilter::new(TimeWindow::ThisMonth);
        b.iter(|| black_box(manager.filter_entries(&filter, now)).len())
    });

    c.bench_function("entries_for_group", |b| {
        b.iter(|| black_box(manager.entries_for_group(group_id)).len())
    });

    c.bench_function("average_mood", |b| b.iter(|| black_box(manager.average_mood())));

    c.bench_function("all_group_stats", |b| {
        b.iter(|| black_box(manager.all_group_stats()).len())
    });

    c.bench_function("calendar_month", |b| {
        let cursor = MonthCursor::containing(now.date_naive());
        b.iter(|| black_box(manager.calendar_month(cursor)).active_day_count())
    });
}

criterion_group!(benches, query_benchmarks);
criterion_main!(benches);
