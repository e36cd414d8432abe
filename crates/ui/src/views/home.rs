use dioxus::prelude::*;
use dioxus_router::Link;

use lms_core::SessionRouter;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let session_router = use_context::<Signal<SessionRouter>>();
    let active = session_router.read().active();

    rsx! {
        div { class: "page home",
            h2 { "Welcome back" }
            p { "Pick a session from the sidebar, or continue where you left off." }
            Link {
                class: "continue-link",
                to: Route::lesson(active),
                "Continue: {active}"
            }
        }
    }
}
