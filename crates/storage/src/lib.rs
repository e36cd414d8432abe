#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{CompletionRepository, InMemoryRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
