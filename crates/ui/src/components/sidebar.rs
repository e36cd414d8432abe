use dioxus::prelude::*;
use dioxus_router::use_navigator;

use lms_core::model::CompletionSet;
use lms_core::{SessionRouter, SidebarState};

use crate::components::CompletionRefresh;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{DayGroupVm, map_day_groups};

#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = use_navigator();
    let session_router = use_context::<Signal<SessionRouter>>();
    let mut sidebar = use_context::<Signal<SidebarState>>();
    let refresh = use_context::<CompletionRefresh>();

    let completion = ctx.completion();
    let completed_resource = use_resource(move || {
        let completion = completion.clone();
        // subscribing to the counter re-reads the set after each completion
        let _tick = (refresh.0)();
        async move {
            completion
                .completed()
                .await
                .map_err(|_| crate::views::ViewError::Unknown)
        }
    });
    let completed = match view_state_from_resource(completed_resource) {
        ViewState::Ready(set) => set,
        _ => CompletionSet::new(),
    };

    let state = sidebar();
    let groups = map_day_groups(
        &ctx.catalog().outline(),
        &completed,
        &session_router.read(),
    );

    let on_select = use_callback(move |(day, session): (u32, u32)| {
        // hand the selection to the external router; active state flows
        // back through the layout's route-change reaction
        nav.push(Route::Lesson { day, session });
        let next = sidebar.peek().session_selected();
        sidebar.set(next);
    });

    let toggle_label = if state.is_visible() { "Hide" } else { "Menu" };

    rsx! {
        nav { class: "sidebar", "data-state": "{state:?}",
            div { class: "sidebar-top",
                button {
                    class: "sidebar-toggle",
                    title: "Toggle sidebar (Ctrl+B)",
                    onclick: move |_| {
                        let next = sidebar.peek().toggled();
                        sidebar.set(next);
                    },
                    "{toggle_label}"
                }
                if state.is_visible() {
                    h1 { "Course Dashboard" }
                }
            }
            if state.is_visible() {
                for group in groups {
                    DayGroup { key: "{group.day}", group: group.clone(), on_select }
                }
            }
        }
    }
}

#[component]
fn DayGroup(group: DayGroupVm, on_select: Callback<(u32, u32)>) -> Element {
    let mut session_router = use_context::<Signal<SessionRouter>>();
    let DayGroupVm {
        day,
        title,
        open,
        completed,
        total,
        sessions,
    } = group;

    rsx! {
        section { class: "day-group",
            button {
                class: "day-header",
                onclick: move |_| session_router.write().toggle_day(day),
                span { class: "day-title", "Day {day}: {title}" }
                span { class: "day-badge", "{completed}/{total}" }
            }
            if open {
                ul { class: "day-sessions",
                    for link in sessions {
                        li { key: "{link.session}",
                            button {
                                class: if link.active { "session-link active" } else { "session-link" },
                                onclick: move |_| on_select.call((link.day, link.session)),
                                span { "{link.label}" }
                                if link.completed {
                                    span { class: "session-check", "✓" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
