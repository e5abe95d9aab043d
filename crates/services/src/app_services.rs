use std::sync::Arc;

use flags_core::{Dataset, FlagUrlResolver};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz::QuizLoopService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    dataset: Arc<Dataset>,
    flag_urls: FlagUrlResolver,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, Dataset::builtin()))
    }

    /// Build services over in-memory storage; nothing outlives the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory(), Dataset::builtin())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        let quiz_loop = Arc::new(QuizLoopService::new(
            Arc::clone(&dataset),
            Arc::clone(&storage.kv),
        ));
        Self {
            dataset,
            flag_urls: FlagUrlResolver::default(),
            quiz_loop,
        }
    }

    #[must_use]
    pub fn with_flag_urls(mut self, flag_urls: FlagUrlResolver) -> Self {
        self.flag_urls = flag_urls;
        self
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn flag_urls(&self) -> &FlagUrlResolver {
        &self.flag_urls
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
