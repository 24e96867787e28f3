//! Aggregate statistics over diary entries.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{BirdGroup, DiaryEntry, Mood};

use super::CalendarRules;

/// Sum of offspring counts
pub fn total_offspring<'a, I>(entries: I) -> u64
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    entries
        .into_iter()
        .map(|entry| entry.offspring_count as u64)
        .sum()
}

/// Mean mood rank bucketed back into a mood; Neutral when there are no entries
pub fn average_mood<'a, I>(entries: I) -> Mood
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    let (sum, count) = entries
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), entry| {
            (sum + entry.mood.rank() as u64, count + 1)
        });

    let average = if count == 0 {
        Mood::Neutral.rank() as f64
    } else {
        sum as f64 / count as f64
    };

    Mood::from_average(average)
}

/// Distinct calendar days that have at least one entry
pub fn days_with_entries<'a, I>(entries: I, rules: &CalendarRules) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    entries
        .into_iter()
        .map(|entry| rules.day_of(entry.date))
        .collect()
}

/// Whole-diary figures for the statistics screen
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_offspring: u64,
    pub average_mood: Mood,
    pub entry_count: usize,
    pub group_count: usize,
}

impl Summary {
    pub fn compute(groups: &[BirdGroup], entries: &[DiaryEntry]) -> Self {
        Self {
            total_offspring: total_offspring(entries),
            average_mood: average_mood(entries),
            entry_count: entries.len(),
            group_count: groups.len(),
        }
    }
}

/// Figures for a single group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub group_id: Uuid,
    pub name: String,
    pub bird_count: usize,
    pub entry_count: usize,
    pub total_offspring: u64,
    pub average_mood: Mood,
}

impl GroupStats {
    pub fn compute(group: &BirdGroup, entries: &[DiaryEntry]) -> Self {
        let own: Vec<&DiaryEntry> = entries
            .iter()
            .filter(|entry| entry.group_id == group.id)
            .collect();

        Self {
            group_id: group.id,
            name: group.name.clone(),
            bird_count: group.bird_count(),
            entry_count: own.len(),
            total_offspring: total_offspring(own.iter().copied()),
            average_mood: average_mood(own.iter().copied()),
        }
    }
}
