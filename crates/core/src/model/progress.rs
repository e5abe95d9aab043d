use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::difficulty::Difficulty;
use crate::model::ids::CountryCode;

/// Minimum number of correct answers for a country to count as mastered.
pub const MASTERY_THRESHOLD: u32 = 3;

//
// ─── PROGRESS ENTRY ────────────────────────────────────────────────────────────
//

/// Long-term right/wrong counters for one country. A missing counter reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressEntry {
    pub right: u32,
    pub wrong: u32,
}

impl ProgressEntry {
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.right.saturating_add(self.wrong)
    }

    #[must_use]
    pub fn is_mastered(&self) -> bool {
        self.right >= MASTERY_THRESHOLD
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Per-country progress, keyed by country code.
///
/// An entry exists only for countries that have been asked at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<CountryCode, ProgressEntry>);

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the right or wrong counter, creating a zeroed entry first.
    pub fn record_answer(&mut self, code: &CountryCode, is_correct: bool) {
        let entry = self.0.entry(code.clone()).or_default();
        if is_correct {
            entry.right = entry.right.saturating_add(1);
        } else {
            entry.wrong = entry.wrong.saturating_add(1);
        }
    }

    #[must_use]
    pub fn get(&self, code: &CountryCode) -> Option<&ProgressEntry> {
        self.0.get(code)
    }

    #[must_use]
    pub fn is_mastered(&self, code: &CountryCode) -> bool {
        self.get(code).is_some_and(ProgressEntry::is_mastered)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &ProgressEntry)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of right answers across all countries.
    #[must_use]
    pub fn total_right(&self) -> u64 {
        self.0.values().map(|e| u64::from(e.right)).sum()
    }

    /// Sum of wrong answers across all countries.
    #[must_use]
    pub fn total_wrong(&self) -> u64 {
        self.0.values().map(|e| u64::from(e.wrong)).sum()
    }
}

impl FromIterator<(CountryCode, ProgressEntry)> for Progress {
    fn from_iter<T: IntoIterator<Item = (CountryCode, ProgressEntry)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

//
// ─── BEST STREAKS ──────────────────────────────────────────────────────────────
//

/// Best streak per difficulty.
///
/// Keys absent from storage read as `0`; they are kept absent so that
/// re-saving a loaded value writes back the same content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestStreaks(BTreeMap<Difficulty, u32>);

impl BestStreaks {
    /// Every difficulty present and zeroed.
    #[must_use]
    pub fn zeroed() -> Self {
        Self(Difficulty::ALL.into_iter().map(|d| (d, 0)).collect())
    }

    /// No difficulty present.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.0.get(&difficulty).copied().unwrap_or(0)
    }

    pub fn set(&mut self, difficulty: Difficulty, value: u32) {
        self.0.insert(difficulty, value);
    }

    #[must_use]
    pub fn contains(&self, difficulty: Difficulty) -> bool {
        self.0.contains_key(&difficulty)
    }
}

impl Default for BestStreaks {
    fn default() -> Self {
        Self::zeroed()
    }
}

//
// ─── PROGRESS STORE ────────────────────────────────────────────────────────────
//

/// Everything that survives between runs: per-country progress and best streaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    pub progress: Progress,
    pub best_streaks: BestStreaks,
}

impl ProgressStore {
    #[must_use]
    pub fn new(progress: Progress, best_streaks: BestStreaks) -> Self {
        Self {
            progress,
            best_streaks,
        }
    }

    /// A store with no progress and every best streak at zero.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Record a scored answer. Pure mutation; persisting is the caller's job.
    pub fn record_answer(&mut self, code: &CountryCode, is_correct: bool) {
        self.progress.record_answer(code, is_correct);
    }
}
