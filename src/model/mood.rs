//! Mood scale recorded with each diary entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiaryError;

/// How the flock seemed on the day of an entry
///
/// Persisted by label ("Very Happy", ...). The numeric rank exists only for
/// averaging and is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Very Happy")]
    VeryHappy,
    #[serde(rename = "Happy")]
    Happy,
    #[default]
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Sad")]
    Sad,
    #[serde(rename = "Very Sad")]
    VerySad,
}

impl Mood {
    /// All moods, happiest first
    pub const ALL: [Mood; 5] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::VerySad,
    ];

    /// Rank used for averaging: VeryHappy = 5 ... VerySad = 1
    pub fn rank(self) -> u8 {
        match self {
            Mood::VeryHappy => 5,
            Mood::Happy => 4,
            Mood::Neutral => 3,
            Mood::Sad => 2,
            Mood::VerySad => 1,
        }
    }

    /// Bucket an average rank back into a mood
    ///
    /// ```text
    /// [4.5, ∞)   → VeryHappy
    /// [3.5, 4.5) → Happy
    /// [2.5, 3.5) → Neutral
    /// [1.5, 2.5) → Sad
    /// (-∞, 1.5)  → VerySad
    /// ```
    pub fn from_average(average: f64) -> Self {
        if average >= 4.5 {
            Mood::VeryHappy
        } else if average >= 3.5 {
            Mood::Happy
        } else if average >= 2.5 {
            Mood::Neutral
        } else if average >= 1.5 {
            Mood::Sad
        } else {
            Mood::VerySad
        }
    }

    /// Human-readable label, also the persisted form
    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }

    /// Icon name for front ends
    pub fn icon(self) -> &'static str {
        match self {
            Mood::VeryHappy | Mood::Happy => "face.smiling",
            Mood::Neutral => "face.neutral",
            Mood::Sad => "face.frown",
            Mood::VerySad => "face.dashed",
        }
    }

    /// Accent color name for front ends
    pub fn color(self) -> &'static str {
        match self {
            Mood::VeryHappy => "green",
            Mood::Happy => "blue",
            Mood::Neutral => "orange",
            Mood::Sad => "yellow",
            Mood::VerySad => "red",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the label ("Very Happy") or kebab/snake forms ("very-happy")
impl FromStr for Mood {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "veryhappy" => Ok(Mood::VeryHappy),
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "verysad" => Ok(Mood::VerySad),
            _ => Err(DiaryError::InvalidInput(format!("unknown mood '{}'", s))),
        }
    }
}
