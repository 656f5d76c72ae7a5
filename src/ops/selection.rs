use std::collections::HashSet;

/// Task ids staged for bulk completion.
///
/// Membership is the only contract: ids of since-deleted tasks may linger and
/// are harmless (bulk completion ignores ids not in the store). Never
/// persisted; every session starts empty.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<u64>,
}

impl SelectionSet {
    /// Flip membership: present → removed, absent → added.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Gates bulk completion (disabled at zero).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<u64> {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut selection = SelectionSet::default();
        assert!(selection.toggle(7));
        assert!(selection.contains(7));
        assert!(!selection.toggle(7));
        assert!(!selection.contains(7));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_accepts_ids_without_validation() {
        // Stale ids (deleted tasks) are tolerated by contract
        let mut selection = SelectionSet::default();
        selection.toggle(u64::MAX);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut selection = SelectionSet::default();
        selection.toggle(1);
        selection.toggle(3);
        assert_eq!(selection.len(), 2);
        selection.clear();
        assert!(selection.is_empty());
    }
}
