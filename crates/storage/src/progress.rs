//! Best-effort persistence of quiz progress over a `KeyValueStore`.
//!
//! Loading never fails: missing or corrupt values fall back to defaults.
//! Saving never fails either: errors are logged and dropped.

use std::sync::Arc;

use flags_core::model::{
    BestStreaks, CountryCode, Difficulty, Progress, ProgressEntry, ProgressStore,
};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::repository::{KeyValueStore, StorageError};

pub const PROGRESS_KEY: &str = "flags-progress";
pub const BEST_STREAKS_KEY: &str = "flags-best-streaks";
/// Single best streak written before streaks were tracked per difficulty.
pub const LEGACY_BEST_STREAK_KEY: &str = "flags-best-streak";

#[derive(Clone)]
pub struct ProgressPersistence {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressPersistence {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read progress and best streaks, migrating the legacy best-streak key if needed.
    pub async fn load(&self) -> ProgressStore {
        let progress = match self.kv.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => decode_progress(&raw),
            Ok(None) => Progress::new(),
            Err(err) => {
                warn!(error = %err, "progress unavailable, starting empty");
                Progress::new()
            }
        };

        let best_streaks = match self.kv.get(BEST_STREAKS_KEY).await {
            Ok(Some(raw)) => decode_best_streaks(&raw),
            Ok(None) => self.migrate_legacy_best_streak().await,
            Err(err) => {
                warn!(error = %err, "best streaks unavailable, starting at zero");
                BestStreaks::zeroed()
            }
        };

        debug!(countries = progress.len(), "progress loaded");
        ProgressStore::new(progress, best_streaks)
    }

    /// Persist progress and best streaks. Failures are logged, never returned.
    pub async fn save(&self, store: &ProgressStore) {
        if let Err(err) = self.try_save(store).await {
            warn!(error = %err, "failed to save progress");
        }
    }

    /// Clear all progress and best streaks, persisting the empty state.
    pub async fn reset(&self) -> ProgressStore {
        let store = ProgressStore::reset();
        self.save(&store).await;
        info!("progress reset");
        store
    }

    async fn try_save(&self, store: &ProgressStore) -> Result<(), StorageError> {
        let progress = serde_json::to_string(&store.progress)?;
        let best_streaks = serde_json::to_string(&store.best_streaks)?;
        self.kv.set(PROGRESS_KEY, &progress).await?;
        self.kv.set(BEST_STREAKS_KEY, &best_streaks).await?;
        Ok(())
    }

    async fn migrate_legacy_best_streak(&self) -> BestStreaks {
        let mut streaks = BestStreaks::zeroed();
        let legacy = match self.kv.get(LEGACY_BEST_STREAK_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return streaks,
            Err(err) => {
                warn!(error = %err, "legacy best streak unavailable");
                return streaks;
            }
        };

        let value = parse_legacy_streak(&legacy);
        streaks.set(Difficulty::Easy, value);

        // Keep the legacy key until the new one is safely written.
        let written = match serde_json::to_string(&streaks) {
            Ok(json) => self.kv.set(BEST_STREAKS_KEY, &json).await,
            Err(err) => Err(err.into()),
        };
        match written {
            Ok(()) => {
                if let Err(err) = self.kv.remove(LEGACY_BEST_STREAK_KEY).await {
                    warn!(error = %err, "failed to remove legacy best streak");
                }
                info!(value, "migrated legacy best streak to easy");
            }
            Err(err) => warn!(error = %err, "failed to persist migrated best streak"),
        }
        streaks
    }
}

fn parse_legacy_streak(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

fn decode_object(raw: &str, key: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            warn!(key, "stored value is not an object, ignoring");
            None
        }
        Err(err) => {
            warn!(key, error = %err, "stored value is not valid JSON, ignoring");
            None
        }
    }
}

fn decode_progress(raw: &str) -> Progress {
    let Some(map) = decode_object(raw, PROGRESS_KEY) else {
        return Progress::new();
    };
    map.into_iter()
        .filter_map(|(code, entry)| {
            let code = CountryCode::new(&code).ok()?;
            match serde_json::from_value::<ProgressEntry>(entry) {
                Ok(entry) => Some((code, entry)),
                Err(err) => {
                    warn!(%code, error = %err, "dropping malformed progress entry");
                    None
                }
            }
        })
        .collect()
}

fn decode_best_streaks(raw: &str) -> BestStreaks {
    let Some(map) = decode_object(raw, BEST_STREAKS_KEY) else {
        return BestStreaks::zeroed();
    };
    let mut streaks = BestStreaks::empty();
    for (key, value) in map {
        let Ok(difficulty) = key.parse::<Difficulty>() else {
            continue;
        };
        let value = value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        streaks.set(difficulty, value);
    }
    streaks
}
