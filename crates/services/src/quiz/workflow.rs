use std::sync::Arc;

use tracing::info;

use flags_core::Dataset;
use flags_core::model::{ContinentFilter, CountryCode, Difficulty, ProgressStore};
use storage::ProgressPersistence;
use storage::repository::KeyValueStore;

use super::session::{AnswerResult, QuizSession};
use super::view::ProgressSnapshot;

/// Orchestrates quiz sessions and persists progress after every mutation.
#[derive(Clone)]
pub struct QuizLoopService {
    dataset: Arc<Dataset>,
    persistence: ProgressPersistence,
    seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            dataset,
            persistence: ProgressPersistence::new(kv),
            seed: None,
        }
    }

    /// Seed every session this service starts.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    /// Load stored progress and open a session with its first question asked.
    pub async fn start_session(
        &self,
        difficulty: Difficulty,
        continent: ContinentFilter,
    ) -> QuizSession {
        let store = self.persistence.load().await;
        let mut session = QuizSession::new(Arc::clone(&self.dataset), store, difficulty)
            .with_continent(continent);
        if let Some(seed) = self.seed {
            session = session.with_seed(seed);
        }
        session.new_question();
        info!(%difficulty, %continent, "quiz session started");
        session
    }

    /// Score a guess and persist the updated progress.
    pub async fn answer(
        &self,
        session: &mut QuizSession,
        chosen: &CountryCode,
    ) -> Option<AnswerResult> {
        let result = session.submit_answer(chosen)?;
        self.persist(session).await;
        Some(result)
    }

    /// Score the 1-based option `index` and persist the updated progress.
    pub async fn answer_option(
        &self,
        session: &mut QuizSession,
        index: usize,
    ) -> Option<AnswerResult> {
        let result = session.submit_option(index)?;
        self.persist(session).await;
        Some(result)
    }

    /// End the session, keeping its best streak.
    pub async fn end_session(&self, session: &mut QuizSession) {
        session.end_session();
        self.persist(session).await;
        info!(difficulty = %session.difficulty(), "quiz session ended");
    }

    /// Switch difficulty, persisting the best streak of the mode being left.
    pub async fn switch_difficulty(
        &self,
        session: &mut QuizSession,
        difficulty: Difficulty,
    ) -> bool {
        let from = session.difficulty();
        if !session.switch_difficulty(difficulty) {
            return false;
        }
        self.persist(session).await;
        info!(%from, to = %difficulty, "difficulty switched");
        true
    }

    /// Clear all progress, both stored and in the session.
    pub async fn reset_progress(&self, session: &mut QuizSession) {
        session.reset_progress();
        self.persist(session).await;
        info!("progress reset");
    }

    /// Clear stored progress without a live session.
    pub async fn reset_stored_progress(&self) -> ProgressStore {
        self.persistence.reset().await
    }

    /// Progress summary straight from storage.
    pub async fn progress_snapshot(&self) -> ProgressSnapshot {
        let store = self.persistence.load().await;
        ProgressSnapshot::build(&self.dataset, &store.progress)
    }

    async fn persist(&self, session: &mut QuizSession) {
        self.persistence.save(session.sync_store()).await;
    }
}
