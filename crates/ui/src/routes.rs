use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use lms_core::model::SessionRoute;
use lms_core::{SessionRouter, SidebarState, classify_width};

use crate::components::{CompletionRefresh, Sidebar, is_toggle_shortcut, viewport_watch_script};
use crate::context::AppContext;
use crate::views::{HomeView, LessonView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/day/:day/session/:session", LessonView)] Lesson { day: u32, session: u32 },
}

impl Route {
    #[must_use]
    pub fn lesson(route: SessionRoute) -> Self {
        Self::Lesson {
            day: route.day,
            session: route.session,
        }
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let nav = dioxus_router::use_navigator();

    // Shared navigation/progress state for the sidebar and the gates.
    let mut session_router =
        use_context_provider(|| Signal::new(SessionRouter::initialize(ctx.initial_route())));
    let mut sidebar = use_context_provider(|| Signal::new(SidebarState::DesktopExpanded));
    use_context_provider(|| CompletionRefresh(Signal::new(0u64)));

    // The window opens at the root; jump to the launch route exactly once.
    let deep_link_ctx = ctx.clone();
    use_effect(move || {
        if deep_link_ctx.take_initial_navigation() {
            nav.push(Route::lesson(deep_link_ctx.initial_route()));
        }
    });

    // Route-change reaction: every external change (selection, back/forward,
    // deep link) lands here. `peek` keeps re-selection from dirtying state.
    let current = use_route::<Route>();
    if let Route::Lesson { day, session } = current {
        let new_route = SessionRoute::new(day, session);
        if session_router.peek().active() != new_route {
            session_router.write().on_route_change(new_route);
        }
    }

    // Viewport watcher: width reports arrive over the eval channel for as
    // long as the layout is mounted. Only classification flips touch state.
    use_future(move || async move {
        let mut watcher = document::eval(&viewport_watch_script());
        while let Ok(width) = watcher.recv::<f64>().await {
            let viewport = classify_width(width as u32);
            if sidebar.peek().viewport() != viewport {
                sidebar.set(SidebarState::reset_for(viewport));
            }
        }
    });

    // Ctrl/Cmd+B sidebar toggle. The handler lives and dies with this
    // layout, so there is exactly one listener per mounted instance.
    let on_key = use_callback(move |evt: KeyboardEvent| {
        if is_toggle_shortcut(&evt.data.key(), evt.data.modifiers()) {
            evt.prevent_default();
            let next = sidebar.peek().toggled();
            sidebar.set(next);
        }
    });

    rsx! {
        div {
            class: "app",
            tabindex: "0",
            onkeydown: move |evt| on_key.call(evt),
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_matches_the_canonical_path_mapping() {
        let route = SessionRoute::new(2, 3);
        assert_eq!(Route::lesson(route).to_string(), route.path());
        assert_eq!(
            "/day/2/session/3".parse::<Route>().ok(),
            Some(Route::Lesson { day: 2, session: 3 }),
        );
    }
}
