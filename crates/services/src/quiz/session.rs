use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use flags_core::Dataset;
use flags_core::model::{ContinentFilter, Country, CountryCode, Difficulty, ProgressStore};

use super::matcher::{MAX_MATCHES, NameMatch, rank_by_name};
use super::options::{pick_answer, pick_options};
use super::view::{ProgressSnapshot, Scoreboard, mastered_countries};

/// Fewest countries the continent filter must leave for a question to make sense.
pub const MIN_ANSWER_POOL: usize = 2;

//
// ─── QUESTION / RESULT ─────────────────────────────────────────────────────────
//

/// A live question. `options` is empty in free-text mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub answer: Country,
    pub options: Vec<Country>,
}

/// Outcome of scoring a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: Country,
    pub chosen: CountryCode,
    /// The session best streak was raised by this answer.
    pub new_best: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// The pool was too small to build a question.
    NoQuestion,
    AwaitingAnswer,
    Answered,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: question generation, scoring and streak bookkeeping.
///
/// Owns the loaded `ProgressStore` and updates it as answers are scored.
/// Persisting the store is left to `QuizLoopService`.
pub struct QuizSession {
    dataset: Arc<Dataset>,
    store: ProgressStore,
    difficulty: Difficulty,
    continent: ContinentFilter,
    correct: u32,
    wrong: u32,
    streak: u32,
    best_streak: u32,
    question: Option<Question>,
    answered: bool,
    rng: StdRng,
}

impl QuizSession {
    /// Start a session; the best streak is seeded from `store` for `difficulty`.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, store: ProgressStore, difficulty: Difficulty) -> Self {
        let best_streak = store.best_streaks.get(difficulty);
        Self {
            dataset,
            store,
            difficulty,
            continent: ContinentFilter::All,
            correct: 0,
            wrong: 0,
            streak: 0,
            best_streak,
            question: None,
            answered: false,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Use a deterministic random source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_continent(mut self, continent: ContinentFilter) -> Self {
        self.continent = continent;
        self
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn continent(&self) -> ContinentFilter {
        self.continent
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (&self.question, self.answered) {
            (None, _) => QuizPhase::NoQuestion,
            (Some(_), false) => QuizPhase::AwaitingAnswer,
            (Some(_), true) => QuizPhase::Answered,
        }
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            correct: self.correct,
            wrong: self.wrong,
            streak: self.streak,
            best_streak: self.best_streak,
        }
    }

    #[must_use]
    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::build(&self.dataset, &self.store.progress)
    }

    #[must_use]
    pub fn mastered_countries(&self) -> Vec<&Country> {
        mastered_countries(&self.dataset, &self.store.progress)
    }

    /// Free-text candidates for `query`, ranked over the whole dataset.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<NameMatch<'_>> {
        rank_by_name(self.dataset.countries(), query, MAX_MATCHES)
    }

    /// Replace the live question with a new one.
    ///
    /// The answer comes from the continent-filtered pool; distractors come from
    /// the whole dataset. Returns `None` (and leaves no live question) when the
    /// filtered pool holds fewer than `MIN_ANSWER_POOL` countries or the dataset
    /// cannot supply the mode's option count.
    pub fn new_question(&mut self) -> Option<&Question> {
        self.answered = false;
        self.question = None;

        let option_count = self.difficulty.option_count();
        let pool = self.dataset.countries_by_continent(self.continent);
        if pool.len() < MIN_ANSWER_POOL {
            debug!(
                continent = %self.continent,
                available = pool.len(),
                "answer pool too small, no question"
            );
            return None;
        }
        if self.dataset.len() < option_count {
            debug!(
                difficulty = %self.difficulty,
                available = self.dataset.len(),
                required = option_count,
                "dataset too small for option count, no question"
            );
            return None;
        }

        let answer = pick_answer(&pool, &mut self.rng)?.clone();
        let options = if self.difficulty.is_free_text() {
            Vec::new()
        } else {
            pick_options(&answer, self.dataset.countries(), option_count, &mut self.rng)
        };

        debug!(answer = %answer.code(), options = options.len(), "new question");
        self.question = Some(Question { answer, options });
        self.question.as_ref()
    }

    /// Score a guess against the live question.
    ///
    /// Returns `None` without touching any counter when no question is live or
    /// it has already been answered.
    pub fn submit_answer(&mut self, chosen: &CountryCode) -> Option<AnswerResult> {
        if self.answered {
            debug!(%chosen, "question already answered, ignoring");
            return None;
        }
        let Some(question) = self.question.as_ref() else {
            debug!(%chosen, "no live question, ignoring");
            return None;
        };

        self.answered = true;
        let correct_answer = question.answer.clone();
        let correct = chosen == correct_answer.code();
        let mut new_best = false;

        if correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            if self.streak > self.best_streak {
                self.best_streak = self.streak;
                new_best = true;
            }
        } else {
            self.wrong = self.wrong.saturating_add(1);
            self.streak = 0;
        }
        self.store.record_answer(correct_answer.code(), correct);

        Some(AnswerResult {
            correct,
            correct_answer,
            chosen: chosen.clone(),
            new_best,
        })
    }

    /// Submit the option at 1-based `index`. Ignored in free-text mode or when out of range.
    pub fn submit_option(&mut self, index: usize) -> Option<AnswerResult> {
        let chosen = self
            .question
            .as_ref()?
            .options
            .get(index.checked_sub(1)?)?
            .code()
            .clone();
        self.submit_answer(&chosen)
    }

    /// Write the session best streak into the store and return it for persisting.
    pub fn sync_store(&mut self) -> &ProgressStore {
        self.store
            .best_streaks
            .set(self.difficulty, self.best_streak);
        &self.store
    }

    /// Close the session: keep the best streak, zero the live counters.
    pub fn end_session(&mut self) {
        self.sync_store();
        self.correct = 0;
        self.wrong = 0;
        self.streak = 0;
    }

    /// Move to another difficulty and ask a new question under it.
    ///
    /// Returns `false` (and changes nothing) when `difficulty` is already active.
    pub fn switch_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.difficulty {
            return false;
        }
        self.end_session();
        self.difficulty = difficulty;
        self.best_streak = self.store.best_streaks.get(difficulty);
        self.new_question();
        true
    }

    /// Change the continent filter and ask a new question from it.
    pub fn set_continent(&mut self, continent: ContinentFilter) -> Option<&Question> {
        self.continent = continent;
        self.new_question()
    }

    /// Forget all progress and best streaks, and zero the live counters.
    pub fn reset_progress(&mut self) {
        self.store = ProgressStore::reset();
        self.correct = 0;
        self.wrong = 0;
        self.streak = 0;
        self.best_streak = 0;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("difficulty", &self.difficulty)
            .field("continent", &self.continent)
            .field("scoreboard", &self.scoreboard())
            .field("phase", &self.phase())
            .field("countries_tracked", &self.store.progress.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
