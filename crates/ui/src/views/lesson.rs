use dioxus::prelude::*;

use lms_core::model::{ChallengeVariant, SessionRoute};
use lms_core::{ContentDescriptor, resolve};

use crate::components::CompletionGate;
use crate::context::AppContext;
use crate::views::{GenericChallengeView, bespoke_challenge};
use crate::vm::markdown_to_html;

#[component]
pub fn LessonView(day: u32, session: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let route = SessionRoute::new(day, session);

    match resolve(ctx.catalog().as_ref(), route) {
        ContentDescriptor::Lesson(lesson) => rsx! {
            article { class: "lesson",
                header { class: "lesson-header",
                    h2 { "{lesson.title}" }
                    span { class: "lesson-slot", "Day {day} · Session {session}" }
                }
                div {
                    class: "lesson-body",
                    dangerous_inner_html: markdown_to_html(&lesson.body_markdown),
                }
                // one gate instance per route: keying forces a fresh scope
                CompletionGate { key: "{day}-{session}", day, session }
            }
        },
        ContentDescriptor::Challenge { variant, .. } => match variant {
            ChallengeVariant::Custom(component) => match bespoke_challenge(&component) {
                Some(challenge) => rsx! {
                    article { class: "lesson challenge",
                        {challenge}
                        CompletionGate { key: "{day}-{session}", day, session }
                    }
                },
                // a key the UI no longer knows degrades like unauthored content
                None => rsx! {
                    PlaceholderView { day, session }
                },
            },
            ChallengeVariant::Generic(template) => rsx! {
                article { class: "lesson challenge",
                    GenericChallengeView { template }
                    CompletionGate { key: "{day}-{session}", day, session }
                }
            },
        },
        ContentDescriptor::Placeholder { .. } => rsx! {
            PlaceholderView { day, session }
        },
    }
}

#[component]
fn PlaceholderView(day: u32, session: u32) -> Element {
    rsx! {
        div { class: "page placeholder",
            h2 { "Coming soon" }
            p { "Day {day}, session {session} isn't ready yet. Check back later." }
        }
    }
}
