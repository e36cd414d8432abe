use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use lms_core::model::{CourseCatalog, SessionRoute};
use services::CompletionService;

pub trait UiApp: Send + Sync {
    fn initial_route(&self) -> SessionRoute;

    fn completion(&self) -> Arc<CompletionService>;
    fn catalog(&self) -> Arc<dyn CourseCatalog>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_route: SessionRoute,
    deep_link_once: Arc<AtomicBool>,

    completion: Arc<CompletionService>,
    catalog: Arc<dyn CourseCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_route: app.initial_route(),
            deep_link_once: Arc::new(AtomicBool::new(true)),
            completion: app.completion(),
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn initial_route(&self) -> SessionRoute {
        self.initial_route
    }

    /// True exactly once per launch: the window opens at the root and the
    /// layout navigates to the initial route on first render.
    #[must_use]
    pub fn take_initial_navigation(&self) -> bool {
        self.deep_link_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<dyn CourseCatalog> {
        Arc::clone(&self.catalog)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
