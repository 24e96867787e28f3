//! App variant: pigeon or chicken diary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiaryError;

/// Which kind of bird the diary tracks
///
/// The two variants share all behavior. They differ only in defaults,
/// suggested palettes, wording, and the storage key of the group slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Pigeon,
    Chicken,
}

const PIGEON_COLORS: &[&str] = &["Blue Bar", "Checker", "Red", "Spread", "White", "Black"];
const PIGEON_BREEDS: &[&str] = &[
    "Unknown", "Homing", "Racing", "Fantail", "King", "Modena", "Tumbler",
];

const CHICKEN_COLORS: &[&str] = &["Brown", "White", "Black", "Red", "Golden", "Spotted"];
const CHICKEN_BREEDS: &[&str] = &[
    "Unknown",
    "Rhode Island Red",
    "Leghorn",
    "Plymouth Rock",
    "Sussex",
    "Orpington",
    "Wyandotte",
];

impl Species {
    /// Breed given to birds added without one
    pub const DEFAULT_BREED: &'static str = "Unknown";

    /// Color given to birds added without one
    pub fn default_color(self) -> &'static str {
        match self {
            Species::Pigeon => "Blue Bar",
            Species::Chicken => "Brown",
        }
    }

    /// Suggested colors, default first
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Species::Pigeon => PIGEON_COLORS,
            Species::Chicken => CHICKEN_COLORS,
        }
    }

    /// Suggested breeds, default first
    pub fn breeds(self) -> &'static [&'static str] {
        match self {
            Species::Pigeon => PIGEON_BREEDS,
            Species::Chicken => CHICKEN_BREEDS,
        }
    }

    /// Singular noun for one bird
    pub fn noun(self) -> &'static str {
        match self {
            Species::Pigeon => "pigeon",
            Species::Chicken => "chicken",
        }
    }

    /// Noun for what `offspring_count` counts
    pub fn offspring_noun(self) -> &'static str {
        match self {
            Species::Pigeon => "chick",
            Species::Chicken => "egg",
        }
    }

    /// "1 pigeon", "3 pigeons", "0 chickens"
    pub fn count_label(self, count: usize) -> String {
        plural(count as u64, self.noun())
    }

    /// "1 egg", "4 chicks"
    pub fn offspring_label(self, count: u64) -> String {
        plural(count, self.offspring_noun())
    }

    /// Storage key of the group collection
    pub fn groups_key(self) -> &'static str {
        match self {
            Species::Pigeon => "PigeonGroups",
            Species::Chicken => "ChickenGroups",
        }
    }
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for Species {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pigeon" | "pigeons" => Ok(Species::Pigeon),
            "chicken" | "chickens" => Ok(Species::Chicken),
            other => Err(DiaryError::InvalidInput(format!(
                "unknown species '{}', expected 'pigeon' or 'chicken'",
                other
            ))),
        }
    }
}
