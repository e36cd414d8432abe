use dioxus::prelude::*;

use lms_core::model::{ChallengeTemplate, ComponentKey};

/// Generic end-of-day challenge, parameterized by the catalog's template
/// data.
#[component]
pub fn GenericChallengeView(template: ChallengeTemplate) -> Element {
    rsx! {
        header { class: "lesson-header",
            h2 { "{template.title}" }
            span { class: "lesson-slot", "Challenge" }
        }
        section { class: "challenge-objectives",
            h3 { "Objectives" }
            ul {
                for (index, objective) in template.objectives.iter().enumerate() {
                    li { key: "{index}", "{objective}" }
                }
            }
        }
        section { class: "challenge-starter",
            h3 { "Starter code" }
            pre { code { "{template.starter_code}" } }
        }
    }
}

/// Maps a catalog component key to its bespoke challenge view. Unknown keys
/// yield `None` and the caller falls back to placeholder content.
#[must_use]
pub fn bespoke_challenge(component: &ComponentKey) -> Option<Element> {
    match component.as_str() {
        "kv-store-lab" => Some(rsx! {
            KvStoreLabChallenge {}
        }),
        _ => None,
    }
}

/// Day 2's hand-built challenge: sketch a key-value store API and defend
/// its invariants. Carries its own hints UI, which is why it is not a
/// template instantiation.
#[component]
fn KvStoreLabChallenge() -> Element {
    let mut show_hints = use_signal(|| false);

    rsx! {
        header { class: "lesson-header",
            h2 { "Build a tiny key-value store" }
            span { class: "lesson-slot", "Challenge" }
        }
        p {
            "Design a `Store` type with `get`, `set`, and `remove`, then make "
            "every operation total: no panics for any input."
        }
        section { class: "challenge-starter",
            h3 { "Starter code" }
            pre {
                code {
                    "pub struct Store {{\n    // your state here\n}}\n\n"
                    "impl Store {{\n    pub fn set(&mut self, key: String, value: String) {{\n"
                    "        todo!()\n    }}\n}}\n"
                }
            }
        }
        button {
            class: "hints-toggle",
            onclick: move |_| {
                let next = !show_hints();
                show_hints.set(next);
            },
            if show_hints() { "Hide hints" } else { "Show hints" }
        }
        if show_hints() {
            ul { class: "challenge-hints",
                li { "A `BTreeMap` keeps iteration order stable for tests." }
                li { "Return `Option` from `get` and `remove` instead of panicking." }
                li { "Write the empty-store tests first." }
            }
        }
    }
}
