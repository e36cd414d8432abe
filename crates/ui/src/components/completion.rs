use dioxus::prelude::*;

use lms_core::model::SessionRoute;
use lms_core::{CompletionFlow, CompletionPhase};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Bumped by exactly one on every successful completion; the sidebar badges
/// observe it to re-read the persisted set.
#[derive(Clone, Copy)]
pub struct CompletionRefresh(pub Signal<u64>);

/// Password-gated "finish session" control.
///
/// Callers key this component by route so each `(day, session)` gets its own
/// gate instance and its own scope: unmounting drops any in-flight
/// verification task, so a late response can never touch a dead gate.
#[component]
pub fn CompletionGate(day: u32, session: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let refresh = use_context::<CompletionRefresh>();
    let route = SessionRoute::new(day, session);

    let mut flow = use_signal(CompletionFlow::new);
    let mut password = use_signal(String::new);

    // Seed from the persisted set once storage answers.
    let completion_for_seed = ctx.completion();
    let seed_resource = use_resource(move || {
        let completion = completion_for_seed.clone();
        async move {
            completion
                .is_completed(route)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    use_effect(move || {
        if let ViewState::Ready(true) = view_state_from_resource(seed_resource)
            && matches!(flow.peek().phase(), CompletionPhase::Unstarted)
        {
            flow.set(CompletionFlow::seeded(true));
        }
    });

    let completion = ctx.completion();
    let mut counter = refresh.0;
    let on_submit = use_callback(move |()| {
        // refused while a request is already in flight
        if !flow.write().submit() {
            return;
        }
        let completion = completion.clone();
        let value = password.peek().clone();
        spawn(async move {
            match completion.complete(route, &value).await {
                Ok(_) => {
                    flow.write().resolve_ok();
                    counter += 1;
                }
                Err(err) => flow.write().resolve_err(err.user_message()),
            }
        });
    });

    let current = flow();

    rsx! {
        div { class: "completion-gate",
            if current.is_completed() {
                p { class: "completed-note", "Session completed ✓" }
            } else {
                button {
                    class: "finish-button",
                    onclick: move |_| flow.write().open(),
                    "Finish session"
                }
            }
            if current.dialog_visible() {
                div { class: "dialog-backdrop",
                    div { class: "dialog", role: "dialog",
                        h3 { "Mark session complete" }
                        p { "Enter the session password to record your progress." }
                        input {
                            r#type: "password",
                            value: "{password}",
                            disabled: current.is_verifying(),
                            oninput: move |evt| password.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.data.key() == Key::Enter {
                                    on_submit.call(());
                                }
                            },
                        }
                        if let Some(message) = current.error_message() {
                            p { class: "dialog-error", "{message}" }
                        }
                        div { class: "dialog-actions",
                            button {
                                class: "dialog-cancel",
                                disabled: current.is_verifying(),
                                onclick: move |_| flow.write().dismiss(),
                                "Cancel"
                            }
                            button {
                                class: "dialog-submit",
                                disabled: !current.can_submit(),
                                onclick: move |_| on_submit.call(()),
                                if current.is_verifying() { "Verifying…" } else { "Submit" }
                            }
                        }
                    }
                }
            }
        }
    }
}
