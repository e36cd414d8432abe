use crate::model::{ChallengeVariant, CourseCatalog, LessonRef, SessionRoute};

/// What the lesson pane renders for a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDescriptor {
    Lesson(LessonRef),
    Challenge { day: u32, variant: ChallengeVariant },
    Placeholder { day: u32, session: u32 },
}

/// Total mapping from a route to its content descriptor.
///
/// The challenge slot is resolved first: session 5 is reserved for the
/// end-of-day challenge, so a lesson mapping can never shadow it. Anything
/// the catalog does not know yields `Placeholder`; course content lands
/// incrementally and unfinished sessions are expected, not exceptional.
#[must_use]
pub fn resolve(catalog: &dyn CourseCatalog, route: SessionRoute) -> ContentDescriptor {
    if route.is_challenge() {
        return match catalog.challenge(route.day) {
            Some(variant) => ContentDescriptor::Challenge {
                day: route.day,
                variant,
            },
            None => ContentDescriptor::Placeholder {
                day: route.day,
                session: route.session,
            },
        };
    }

    match catalog.lesson(route) {
        Some(lesson) => ContentDescriptor::Lesson(lesson),
        None => ContentDescriptor::Placeholder {
            day: route.day,
            session: route.session,
        },
    }
}
