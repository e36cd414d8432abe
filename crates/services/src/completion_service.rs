use std::sync::Arc;

use lms_core::model::{CompletionSet, SessionRoute};
use storage::repository::CompletionRepository;

use crate::error::CompletionError;
use crate::verification::Verifier;

/// Result of a successful completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The full set after the union-merge.
    pub completed: CompletionSet,
    /// False when the session had already been recorded.
    pub newly_added: bool,
}

/// Gates the "mark complete" action behind password verification and
/// persists the outcome.
#[derive(Clone)]
pub struct CompletionService {
    verifier: Arc<dyn Verifier>,
    completions: Arc<dyn CompletionRepository>,
}

impl CompletionService {
    #[must_use]
    pub fn new(verifier: Arc<dyn Verifier>, completions: Arc<dyn CompletionRepository>) -> Self {
        Self {
            verifier,
            completions,
        }
    }

    /// Read the persisted completion set.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the store cannot be read.
    pub async fn completed(&self) -> Result<CompletionSet, CompletionError> {
        Ok(self.completions.load().await?)
    }

    /// Whether the given session is already recorded as finished.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the store cannot be read.
    pub async fn is_completed(&self, route: SessionRoute) -> Result<bool, CompletionError> {
        Ok(self.completions.load().await?.contains(route))
    }

    /// Verify the password, then union the session key into the persisted
    /// set and write the full set back. Nothing is persisted on any
    /// verification failure.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Verification` when the password is refused
    /// or the request fails, `CompletionError::Storage` when persistence
    /// fails after a successful check.
    pub async fn complete(
        &self,
        route: SessionRoute,
        password: &str,
    ) -> Result<CompletionOutcome, CompletionError> {
        if let Err(err) = self.verifier.verify(route, password).await {
            tracing::debug!(%route, "completion verification refused");
            return Err(err.into());
        }

        let mut completed = self.completions.load().await?;
        let newly_added = completed.insert(route);
        self.completions.save(&completed).await?;
        tracing::info!(%route, newly_added, "session marked complete");

        Ok(CompletionOutcome {
            completed,
            newly_added,
        })
    }
}
