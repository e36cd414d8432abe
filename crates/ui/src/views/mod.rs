mod challenge;
mod home;
mod lesson;
mod state;

pub use challenge::{GenericChallengeView, bespoke_challenge};
pub use home::HomeView;
pub use lesson::LessonView;
pub use state::{ViewError, ViewState, view_state_from_resource};
