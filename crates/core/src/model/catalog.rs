use std::fmt;

use super::route::SessionRoute;

/// A renderable lesson unit. The dashboard treats the body as opaque
/// markdown supplied by the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRef {
    pub title: String,
    pub body_markdown: String,
}

/// Identifier the UI maps to a bespoke challenge component.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComponentKey(String);

impl ComponentKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Data backing the generic, templated challenge view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub title: String,
    pub objectives: Vec<String>,
    pub starter_code: String,
}

/// How a day's challenge slot renders: a bespoke component, or the generic
/// template parameterized with day-specific data.
///
/// A lookup table of these variants replaces per-day branching at the call
/// sites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChallengeVariant {
    Custom(ComponentKey),
    Generic(ChallengeTemplate),
}

/// Sidebar entry for one session of a day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionLabel {
    pub session: u32,
    pub label: String,
}

/// Sidebar outline entry for one day, challenge slot included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayOutline {
    pub day: u32,
    pub title: String,
    pub sessions: Vec<SessionLabel>,
}

/// Read-only view of the course content consumed by the resolver and the
/// sidebar.
///
/// Implementations must be total: `None` means the content is not authored
/// yet, never an error.
pub trait CourseCatalog: Send + Sync {
    fn lesson(&self, route: SessionRoute) -> Option<LessonRef>;
    fn challenge(&self, day: u32) -> Option<ChallengeVariant>;
    fn outline(&self) -> Vec<DayOutline>;
}
