//! Named group of birds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Bird;

/// A named flock; the unit diary entries attach to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdGroup {
    /// Stable for the group's lifetime
    pub id: Uuid,
    pub name: String,
    pub birds: Vec<Bird>,
    pub date_created: DateTime<Utc>,
}

impl BirdGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_birds(name, Vec::new())
    }

    /// Create a group seeded with birds
    pub fn with_birds(name: impl Into<String>, birds: Vec<Bird>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            birds,
            date_created: Utc::now(),
        }
    }

    pub fn bird_count(&self) -> usize {
        self.birds.len()
    }
}
