use lms_core::SessionRouter;
use lms_core::model::{CompletionSet, DayOutline, SessionRoute};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionLinkVm {
    pub day: u32,
    pub session: u32,
    pub label: String,
    pub completed: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGroupVm {
    pub day: u32,
    pub title: String,
    pub open: bool,
    pub completed: usize,
    pub total: usize,
    pub sessions: Vec<SessionLinkVm>,
}

/// Joins the catalog outline with progress and navigation state for the
/// sidebar.
#[must_use]
pub fn map_day_groups(
    outline: &[DayOutline],
    completed: &CompletionSet,
    router: &SessionRouter,
) -> Vec<DayGroupVm> {
    let active = router.active();
    outline
        .iter()
        .map(|day| DayGroupVm {
            day: day.day,
            title: day.title.clone(),
            open: router.is_day_open(day.day),
            completed: completed.completed_in_day(day.day),
            total: day.sessions.len(),
            sessions: day
                .sessions
                .iter()
                .map(|entry| {
                    let route = SessionRoute::new(day.day, entry.session);
                    SessionLinkVm {
                        day: day.day,
                        session: entry.session,
                        label: entry.label.clone(),
                        completed: completed.contains(route),
                        active: route == active,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::model::SessionLabel;

    fn outline() -> Vec<DayOutline> {
        vec![
            DayOutline {
                day: 1,
                title: "Foundations".into(),
                sessions: vec![
                    SessionLabel {
                        session: 1,
                        label: "Getting started".into(),
                    },
                    SessionLabel {
                        session: 5,
                        label: "Challenge".into(),
                    },
                ],
            },
            DayOutline {
                day: 2,
                title: "State".into(),
                sessions: vec![SessionLabel {
                    session: 1,
                    label: "Ownership".into(),
                }],
            },
        ]
    }

    #[test]
    fn marks_active_completed_and_open() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));
        router.on_route_change(SessionRoute::new(1, 5));

        let completed = CompletionSet::from_keys(["1-1"]);
        let groups = map_day_groups(&outline(), &completed, &router);

        assert_eq!(groups.len(), 2);
        let day1 = &groups[0];
        assert!(day1.open);
        assert_eq!(day1.completed, 1);
        assert_eq!(day1.total, 2);
        assert!(day1.sessions[0].completed);
        assert!(!day1.sessions[0].active);
        assert!(day1.sessions[1].active);

        // day 2 was never navigated to or expanded
        assert!(!groups[1].open);
        assert_eq!(groups[1].completed, 0);
    }
}
