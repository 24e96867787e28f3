//! A single bird inside a group.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Species;

/// One pigeon or chicken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub breed: String,
    pub date_added: DateTime<Utc>,
}

impl Bird {
    /// Create a bird with the species' default color and an unknown breed
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: species.default_color().to_string(),
            breed: Species::DEFAULT_BREED.to_string(),
            date_added: Utc::now(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }
}
