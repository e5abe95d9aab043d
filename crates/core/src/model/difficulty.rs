use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DifficultyParseError {
    #[error("unknown difficulty: {0}")]
    Unknown(String),
}

/// Quiz mode. Multiple-choice modes differ by option count; `Beast` is free text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Beast,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Beast,
    ];

    /// Storage and routing key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Beast => "beast",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Beast => "Beast",
        }
    }

    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            Difficulty::Easy => "4 options",
            Difficulty::Medium => "8 options",
            Difficulty::Hard => "12 options",
            Difficulty::Beast => "Type it",
        }
    }

    /// Number of multiple-choice options; `0` means free-text entry.
    #[must_use]
    pub fn option_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
            Difficulty::Beast => 0,
        }
    }

    #[must_use]
    pub fn is_free_text(self) -> bool {
        self.option_count() == 0
    }

    /// Parse a routing fragment such as `#hard`.
    ///
    /// Returns `None` for anything outside the known set so callers can keep
    /// their current mode.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        fragment.trim().trim_start_matches('#').parse().ok()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key() == wanted)
            .ok_or(DifficultyParseError::Unknown(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_validated() {
        assert_eq!(Difficulty::from_fragment("#Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_fragment("beast"), Some(Difficulty::Beast));
        assert_eq!(Difficulty::from_fragment("#"), None);
        assert_eq!(Difficulty::from_fragment("#insane"), None);
    }

    #[test]
    fn option_counts_match_modes() {
        assert_eq!(Difficulty::Easy.option_count(), 4);
        assert_eq!(Difficulty::Medium.option_count(), 8);
        assert_eq!(Difficulty::Hard.option_count(), 12);
        assert!(Difficulty::Beast.is_free_text());
        assert!(!Difficulty::Easy.is_free_text());
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
