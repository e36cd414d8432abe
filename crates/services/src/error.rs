//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Shown in the dialog when the server gives no usable error text.
pub const GENERIC_VERIFY_FAILURE: &str = "Verification failed. Please try again.";

/// Errors emitted by [`crate::verification::Verifier`] implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerificationError {
    /// The server rejected the password; the message is the server's own
    /// error text, carried verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl VerificationError {
    /// Inline dialog text: the server message verbatim when present, the
    /// generic fallback otherwise. Rejection and transport failure differ
    /// only in this text, not in recovery path.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Http(_) => GENERIC_VERIFY_FAILURE.to_string(),
        }
    }
}

/// Errors emitted by `CompletionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CompletionError {
    /// Inline dialog text for any completion failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Verification(err) => err.user_message(),
            Self::Storage(_) => GENERIC_VERIFY_FAILURE.to_string(),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
