use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::route::SessionRoute;

/// Persisted set of `"{day}-{session}"` keys for finished lessons.
///
/// Serializes as a plain JSON array of strings, the exact shape stored under
/// the `lms-completed` key. Entries are append-only from the dashboard's
/// perspective: inserts union, nothing here removes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the set from persisted keys; duplicates collapse silently.
    #[must_use]
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Idempotent union. Returns true when the key was newly added.
    pub fn insert(&mut self, route: SessionRoute) -> bool {
        self.0.insert(route.completion_key())
    }

    #[must_use]
    pub fn contains(&self, route: SessionRoute) -> bool {
        self.0.contains(&route.completion_key())
    }

    /// Number of completed sessions recorded for the given day.
    #[must_use]
    pub fn completed_in_day(&self, day: u32) -> usize {
        let prefix = format!("{day}-");
        self.0
            .iter()
            .filter(|key| key.strip_prefix(&prefix).is_some_and(|rest| rest.parse::<u32>().is_ok()))
            .count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
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
    fn insert_is_idempotent() {
        let mut set = CompletionSet::new();
        assert!(set.insert(SessionRoute::new(1, 5)));
        assert!(!set.insert(SessionRoute::new(1, 5)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(SessionRoute::new(1, 5)));
    }

    #[test]
    fn per_day_count_does_not_cross_day_prefixes() {
        let set = CompletionSet::from_keys(["1-1", "1-2", "11-1", "2-1"]);
        assert_eq!(set.completed_in_day(1), 2);
        assert_eq!(set.completed_in_day(11), 1);
        assert_eq!(set.completed_in_day(3), 0);
    }

    #[test]
    fn serializes_as_a_json_array_of_keys() {
        let mut set = CompletionSet::new();
        set.insert(SessionRoute::new(1, 2));
        set.insert(SessionRoute::new(1, 1));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["1-1","1-2"]"#);

        let back: CompletionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn duplicate_persisted_keys_collapse() {
        let set = CompletionSet::from_keys(["1-1", "1-1", "2-3"]);
        assert_eq!(set.len(), 2);
    }
}
