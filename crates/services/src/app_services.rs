use std::sync::Arc;

use lms_core::model::SessionRoute;
use storage::repository::Storage;

use crate::completion_service::CompletionService;
use crate::error::AppServicesError;
use crate::verification::{HttpVerifier, Verifier, VerifierConfig};

/// Assembles app-facing services and carries the launch route.
#[derive(Clone)]
pub struct AppServices {
    initial_route: SessionRoute,
    completion: Arc<CompletionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP verifier.
    ///
    /// The initial route is passed through unvalidated: deep links to
    /// sessions the catalog does not know yet degrade at resolution time,
    /// not here.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        verifier_config: VerifierConfig,
        initial_route: SessionRoute,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let verifier: Arc<dyn Verifier> = Arc::new(HttpVerifier::new(verifier_config));
        Ok(Self::with_parts(storage, verifier, initial_route))
    }

    /// Build services from pre-assembled parts. Used by tests to inject an
    /// in-memory store and a scripted verifier.
    #[must_use]
    pub fn with_parts(
        storage: Storage,
        verifier: Arc<dyn Verifier>,
        initial_route: SessionRoute,
    ) -> Self {
        let completion = Arc::new(CompletionService::new(verifier, storage.completions));
        Self {
            initial_route,
            completion,
        }
    }

    #[must_use]
    pub fn initial_route(&self) -> SessionRoute {
        self.initial_route
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}
