use crate::model::{OpenDaySet, SessionRoute};

/// Single source of truth for the active `(day, session)` pair.
///
/// Selection hands a canonical path to the external router; the new active
/// state arrives back through [`SessionRouter::on_route_change`] (selection,
/// back/forward, deep link alike), keeping the URL authoritative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRouter {
    active: SessionRoute,
    open_days: OpenDaySet,
}

impl SessionRouter {
    /// Seeds state from the launch-provided initial route. The route is not
    /// validated against the catalog; resolution degrades downstream.
    #[must_use]
    pub fn initialize(route: SessionRoute) -> Self {
        Self {
            active: route,
            open_days: OpenDaySet::with_day(route.day),
        }
    }

    #[must_use]
    pub fn active(&self) -> SessionRoute {
        self.active
    }

    #[must_use]
    pub fn open_days(&self) -> &OpenDaySet {
        &self.open_days
    }

    #[must_use]
    pub fn is_day_open(&self, day: u32) -> bool {
        self.open_days.contains(day)
    }

    /// Canonical path for a user selection, to be forwarded to the external
    /// router. Active state is not touched here.
    #[must_use]
    pub fn selection_path(day: u32, session: u32) -> String {
        SessionRoute::new(day, session).path()
    }

    /// Reacts to an external route change. Structural equality makes
    /// re-selection a no-op; on a real change the new day is unioned into
    /// the open set without closing previously opened days. Returns true
    /// when the active route changed.
    pub fn on_route_change(&mut self, new_route: SessionRoute) -> bool {
        if new_route == self.active {
            return false;
        }
        self.active = new_route;
        self.open_days.open(new_route.day);
        true
    }

    /// Explicit expand/collapse of a sidebar day group. Collapsing the
    /// active route's day is refused so the open set always covers it.
    pub fn toggle_day(&mut self, day: u32) {
        if !self.open_days.contains(day) {
            self.open_days.open(day);
        } else if day != self.active.day {
            self.open_days.close(day);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_flows_back_through_route_change() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));

        let path = SessionRouter::selection_path(2, 3);
        assert_eq!(path, "/day/2/session/3");
        // selection does not mutate the router
        assert_eq!(router.active(), SessionRoute::new(1, 1));

        let changed = router.on_route_change(SessionRoute::from_path(&path).unwrap());
        assert!(changed);
        assert_eq!(router.active(), SessionRoute::new(2, 3));
        assert!(router.is_day_open(1));
        assert!(router.is_day_open(2));
    }

    #[test]
    fn identical_route_is_a_noop() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));
        let before = router.clone();

        assert!(!router.on_route_change(SessionRoute::new(1, 1)));
        assert_eq!(router, before);
    }

    #[test]
    fn open_days_never_shrink_on_navigation() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));
        router.on_route_change(SessionRoute::new(2, 1));
        router.on_route_change(SessionRoute::new(3, 4));
        router.on_route_change(SessionRoute::new(1, 2));

        for day in [1, 2, 3] {
            assert!(router.is_day_open(day));
        }
    }

    #[test]
    fn routes_outside_the_catalog_pass_through() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));
        router.on_route_change(SessionRoute::new(999, 42));
        assert_eq!(router.active(), SessionRoute::new(999, 42));
        assert!(router.is_day_open(999));
    }

    #[test]
    fn toggle_collapses_inactive_days_only() {
        let mut router = SessionRouter::initialize(SessionRoute::new(1, 1));
        router.on_route_change(SessionRoute::new(2, 1));

        router.toggle_day(1);
        assert!(!router.is_day_open(1));
        router.toggle_day(1);
        assert!(router.is_day_open(1));

        // active day is pinned open
        router.toggle_day(2);
        assert!(router.is_day_open(2));
    }
}
