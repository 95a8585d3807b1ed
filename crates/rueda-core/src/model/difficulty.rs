use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the three ordinal skill levels of a move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Difficulty {
    #[default]
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

/// Level labels, indexed by `level - 1`.
static LABELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

impl Difficulty {
    /// All levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Map an ordinal 1-3 to its level.
    #[must_use]
    pub const fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Human-readable label ("Beginner", "Intermediate", "Advanced").
    #[must_use]
    pub fn label(self) -> &'static str {
        LABELS[usize::from(self.level()) - 1]
    }

    /// One star per level.
    #[must_use]
    pub fn stars(self) -> String {
        "\u{2605}".repeat(usize::from(self.level()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.level()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_level(i64::from(value)).ok_or_else(|| Error::UnknownValue {
            kind: "difficulty",
            value: value.to_string(),
        })
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    /// Accepts the ordinal ("2") or the label, case-insensitively ("intermediate").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(difficulty) = trimmed.parse::<i64>().ok().and_then(Self::from_level) {
            return Ok(difficulty);
        }
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownValue {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}
