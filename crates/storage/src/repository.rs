use async_trait::async_trait;
use lms_core::model::CompletionSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Single key under which the completion set is persisted.
pub const COMPLETED_KEY: &str = "lms-completed";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted completion set.
///
/// The set lives under one key as a JSON array of `"{day}-{session}"`
/// strings: `load` reads it fully (absent key is an empty set) and `save`
/// writes it back fully. Union-merge semantics belong to the caller.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Read the full completion set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or the persisted
    /// value is not a JSON array of strings.
    async fn load(&self) -> Result<CompletionSet, StorageError>;

    /// Write the full completion set back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn save(&self, set: &CompletionSet) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    completed: Arc<Mutex<CompletionSet>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionRepository for InMemoryRepository {
    async fn load(&self) -> Result<CompletionSet, StorageError> {
        let guard = self
            .completed
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, set: &CompletionSet) -> Result<(), StorageError> {
        let mut guard = self
            .completed
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = set.clone();
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub completions: Arc<dyn CompletionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            completions: Arc::new(InMemoryRepository::new()),
        }
    }
}
