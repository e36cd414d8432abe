//! The seeded curriculum. This is the read-only content catalog the
//! navigation core resolves against; lesson bodies are opaque markdown.

use lms_core::model::{
    ChallengeTemplate, ChallengeVariant, ComponentKey, CourseCatalog, DayOutline, LessonRef,
    SessionLabel, SessionRoute,
};

/// Regular lesson slots per day; slot 5 is the challenge.
const LESSON_SLOTS: u32 = 4;

struct DayContent {
    day: u32,
    title: &'static str,
    lessons: Vec<(u32, &'static str, &'static str)>,
    challenge: Option<ChallengeVariant>,
}

pub struct StaticCatalog {
    days: Vec<DayContent>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            days: vec![
                DayContent {
                    day: 1,
                    title: "Foundations",
                    lessons: vec![
                        (
                            1,
                            "Getting started",
                            "# Getting started\n\nInstall the toolchain and run your first \
                             program.\n\n```\nfn main() {\n    println!(\"hello, course!\");\n}\n```\n",
                        ),
                        (
                            2,
                            "Variables and types",
                            "# Variables and types\n\nBindings are immutable by default; opt in \
                             to mutation with `mut`.\n\n```\nlet answer = 42;\nlet mut count = \
                             0;\ncount += answer;\n```\n",
                        ),
                        (
                            3,
                            "Control flow",
                            "# Control flow\n\n`if` and `match` are expressions; they produce \
                             values.\n\n```\nlet label = match count {\n    0 => \"none\",\n    \
                             _ => \"some\",\n};\n```\n",
                        ),
                        (
                            4,
                            "Functions",
                            "# Functions\n\nThe last expression of a body is its return \
                             value.\n\n```\nfn double(x: i64) -> i64 {\n    x * 2\n}\n```\n",
                        ),
                    ],
                    challenge: Some(ChallengeVariant::Generic(ChallengeTemplate {
                        title: "Day 1 challenge: number cruncher".into(),
                        objectives: vec![
                            "Read a list of integers from stdin".into(),
                            "Print their sum, minimum, and maximum".into(),
                            "Handle an empty list without panicking".into(),
                        ],
                        starter_code: "fn main() {\n    // parse stdin lines into Vec<i64>\n}\n"
                            .into(),
                    })),
                },
                DayContent {
                    day: 2,
                    title: "State & Storage",
                    lessons: vec![
                        (
                            1,
                            "Ownership",
                            "# Ownership\n\nEvery value has one owner; moves transfer it.\n\n```\n\
                             let a = String::from(\"data\");\nlet b = a; // a is moved\n```\n",
                        ),
                        (
                            2,
                            "Borrowing",
                            "# Borrowing\n\nShared references are read-only; `&mut` is \
                             exclusive.\n\n```\nfn len(s: &str) -> usize {\n    s.len()\n}\n```\n",
                        ),
                        (
                            3,
                            "Collections",
                            "# Collections\n\n`Vec` for sequences, maps for keyed \
                             lookups.\n\n```\nlet mut scores = std::collections::BTreeMap::new();\n\
                             scores.insert(\"day-1\", 3);\n```\n",
                        ),
                    ],
                    challenge: Some(ChallengeVariant::Custom(ComponentKey::new("kv-store-lab"))),
                },
                DayContent {
                    day: 3,
                    title: "Going Async",
                    lessons: vec![(
                        1,
                        "Futures",
                        "# Futures\n\nAn `async fn` returns a future; nothing runs until it is \
                         awaited.\n\n```\nasync fn fetch() -> String {\n    \
                         \"payload\".to_string()\n}\n```\n",
                    )],
                    // remaining day 3 sessions land with the next content drop
                    challenge: None,
                },
            ],
        }
    }

    fn day(&self, day: u32) -> Option<&DayContent> {
        self.days.iter().find(|entry| entry.day == day)
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCatalog for StaticCatalog {
    fn lesson(&self, route: SessionRoute) -> Option<LessonRef> {
        self.day(route.day)?
            .lessons
            .iter()
            .find(|(session, _, _)| *session == route.session)
            .map(|(_, title, body)| LessonRef {
                title: (*title).to_string(),
                body_markdown: (*body).to_string(),
            })
    }

    fn challenge(&self, day: u32) -> Option<ChallengeVariant> {
        self.day(day)?.challenge.clone()
    }

    fn outline(&self) -> Vec<DayOutline> {
        self.days
            .iter()
            .map(|entry| {
                let mut sessions: Vec<SessionLabel> = (1..=LESSON_SLOTS)
                    .map(|slot| SessionLabel {
                        session: slot,
                        label: entry
                            .lessons
                            .iter()
                            .find(|(session, _, _)| *session == slot)
                            .map_or_else(|| format!("Session {slot}"), |(_, title, _)| {
                                (*title).to_string()
                            }),
                    })
                    .collect();
                sessions.push(SessionLabel {
                    session: lms_core::model::CHALLENGE_SESSION,
                    label: "Challenge".to_string(),
                });
                DayOutline {
                    day: entry.day,
                    title: entry.title.to_string(),
                    sessions,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outlined_day_has_five_slots() {
        let catalog = StaticCatalog::new();
        for day in catalog.outline() {
            assert_eq!(day.sessions.len(), 5);
            assert_eq!(day.sessions.last().unwrap().label, "Challenge");
        }
    }

    #[test]
    fn lessons_resolve_and_gaps_do_not() {
        let catalog = StaticCatalog::new();
        assert!(catalog.lesson(SessionRoute::new(1, 1)).is_some());
        assert!(catalog.lesson(SessionRoute::new(3, 2)).is_none());
        assert!(catalog.lesson(SessionRoute::new(42, 1)).is_none());
    }

    #[test]
    fn challenge_variants_follow_the_per_day_table() {
        let catalog = StaticCatalog::new();
        assert!(matches!(
            catalog.challenge(1),
            Some(ChallengeVariant::Generic(_)),
        ));
        assert!(matches!(
            catalog.challenge(2),
            Some(ChallengeVariant::Custom(key)) if key.as_str() == "kv-store-lab",
        ));
        assert_eq!(catalog.challenge(3), None);
    }
}
