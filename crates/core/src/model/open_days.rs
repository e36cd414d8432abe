use std::collections::BTreeSet;

/// Set of day numbers whose sidebar group is expanded.
///
/// Grows as the learner navigates; only an explicit collapse removes a day.
/// The active route's day is guarded by the router and never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenDaySet(BTreeSet<u32>);

impl OpenDaySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_day(day: u32) -> Self {
        let mut set = Self::default();
        set.open(day);
        set
    }

    pub fn open(&mut self, day: u32) {
        self.0.insert(day);
    }

    pub fn close(&mut self, day: u32) {
        self.0.remove(&day);
    }

    #[must_use]
    pub fn contains(&self, day: u32) -> bool {
        self.0.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_idempotent() {
        let mut days = OpenDaySet::with_day(1);
        days.open(1);
        days.open(2);
        assert_eq!(days.len(), 2);
        assert!(days.contains(1));
        assert!(days.contains(2));
    }

    #[test]
    fn close_removes_only_the_given_day() {
        let mut days = OpenDaySet::with_day(1);
        days.open(2);
        days.close(1);
        assert!(!days.contains(1));
        assert!(days.contains(2));
    }
}
