//! Dated diary observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Mood;

/// A single dated observation attached to one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: Uuid,

    /// Set at creation, never edited
    pub date: DateTime<Utc>,

    /// Group this entry belongs to (may dangle, see `DiaryManager::add_diary_entry`)
    pub group_id: Uuid,

    pub mood: Mood,

    /// Chicks or eggs counted that day
    pub offspring_count: u32,

    pub notes: String,
}

impl DiaryEntry {
    /// Create an entry dated now
    pub fn new(group_id: Uuid, mood: Mood, offspring_count: u32, notes: impl Into<String>) -> Self {
        Self::recorded_at(group_id, mood, offspring_count, notes, Utc::now())
    }

    /// Create an entry with an explicit timestamp (imports, replays, tests)
    pub fn recorded_at(
        group_id: Uuid,
        mood: Mood,
        offspring_count: u32,
        notes: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            group_id,
            mood,
            offspring_count,
            notes: notes.into(),
        }
    }
}
