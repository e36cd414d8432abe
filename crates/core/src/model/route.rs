use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed session index reserved for an end-of-day challenge.
pub const CHALLENGE_SESSION: u32 = 5;

/// The `(day, session)` pair identifying the currently displayed lesson.
///
/// Ephemeral: derived from the URL and mutated only via navigation. A route
/// is not required to exist in the content catalog; resolution degrades to a
/// placeholder instead of failing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionRoute {
    pub day: u32,
    pub session: u32,
}

impl SessionRoute {
    #[must_use]
    pub const fn new(day: u32, session: u32) -> Self {
        Self { day, session }
    }

    /// Returns true when this route addresses the end-of-day challenge slot.
    #[must_use]
    pub const fn is_challenge(&self) -> bool {
        self.session == CHALLENGE_SESSION
    }

    /// Composite key recorded in the completion set.
    #[must_use]
    pub fn completion_key(&self) -> String {
        format!("{}-{}", self.day, self.session)
    }

    /// Canonical path handed to the external router.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/day/{}/session/{}", self.day, self.session)
    }

    /// Reverses [`SessionRoute::path`]. Any other shape yields `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let rest = path.strip_prefix("/day/")?;
        let (day, session) = rest.split_once("/session/")?;
        Some(Self {
            day: day.parse().ok()?,
            session: session.parse().ok()?,
        })
    }
}

impl fmt::Debug for SessionRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionRoute({}-{})", self.day, self.session)
    }
}

impl fmt::Display for SessionRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} session {}", self.day, self.session)
    }
}
