use std::sync::Arc;

use flags_core::model::{CountryCode, Difficulty, ProgressEntry, ProgressStore};
use storage::progress::{BEST_STREAKS_KEY, LEGACY_BEST_STREAK_KEY};
use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;
use storage::ProgressPersistence;

#[tokio::test]
async fn sqlite_key_value_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Migrations are idempotent.
    repo.migrate().await.expect("migrate twice");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.set("greeting", "hello").await.unwrap();
    repo.set("greeting", "hi").await.unwrap();
    assert_eq!(repo.get("greeting").await.unwrap().as_deref(), Some("hi"));

    repo.remove("greeting").await.unwrap();
    repo.remove("greeting").await.unwrap();
    assert_eq!(repo.get("greeting").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_persists_progress_across_loads() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("storage");
    let persistence = ProgressPersistence::new(Arc::clone(&storage.kv));

    let us = CountryCode::new("us").unwrap();
    let mut store = persistence.load().await;
    assert_eq!(store, ProgressStore::reset());

    store.record_answer(&us, true);
    store.record_answer(&us, false);
    store.best_streaks.set(Difficulty::Hard, 6);
    persistence.save(&store).await;

    let reloaded = persistence.load().await;
    assert_eq!(reloaded.progress.get(&us), Some(&ProgressEntry { right: 1, wrong: 1 }));
    assert_eq!(reloaded.best_streaks.get(Difficulty::Hard), 6);
}

#[tokio::test]
async fn sqlite_migrates_legacy_best_streak() {
    let storage = Storage::sqlite("sqlite:file:memdb_legacy?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set(LEGACY_BEST_STREAK_KEY, "11").await.unwrap();

    let persistence = ProgressPersistence::new(Arc::clone(&storage.kv));
    let store = persistence.load().await;

    assert_eq!(store.best_streaks.get(Difficulty::Easy), 11);
    assert_eq!(storage.kv.get(LEGACY_BEST_STREAK_KEY).await.unwrap(), None);
    assert!(storage.kv.get(BEST_STREAKS_KEY).await.unwrap().is_some());
}
