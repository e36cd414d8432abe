mod catalog;
mod completion;
mod open_days;
mod route;

pub use catalog::{
    ChallengeTemplate, ChallengeVariant, ComponentKey, CourseCatalog, DayOutline, LessonRef,
    SessionLabel,
};
pub use completion::CompletionSet;
pub use open_days::OpenDaySet;
pub use route::{CHALLENGE_SESSION, SessionRoute};
