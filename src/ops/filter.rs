use crate::model::task::{Priority, Task};

/// The active filter criterion. Transient UI state: defaults to All at every
/// session start and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Priority),
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(p) => p.label(),
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(p) => task.priority == p,
        }
    }
}

/// Project the store through the filter criterion.
///
/// Pure function over the current snapshot: callers re-invoke it after every
/// store or criterion change rather than caching the result. All returns the
/// sequence unchanged; a tier returns the order-preserving subsequence. An
/// empty result is a valid outcome (the caller renders a placeholder).
pub fn apply(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(4, "ship release".into(), Priority::Urgent),
            Task::new(3, "write docs".into(), Priority::Medium),
            Task::new(2, "fix login bug".into(), Priority::Urgent),
            Task::new(1, "water plants".into(), Priority::Low),
        ]
    }

    #[test]
    fn all_is_identity_on_order_and_length() {
        let tasks = sample();
        let visible = apply(&tasks, Filter::All);
        assert_eq!(visible.len(), tasks.len());
        for (v, t) in visible.iter().zip(&tasks) {
            assert_eq!(v.id, t.id);
        }
    }

    #[test]
    fn tier_filter_is_an_order_preserving_subsequence() {
        let tasks = sample();
        let visible = apply(&tasks, Filter::Only(Priority::Urgent));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| t.priority == Priority::Urgent));
        // Same relative order as the store
        assert_eq!(visible[0].id, 4);
        assert_eq!(visible[1].id, 2);
    }

    #[test]
    fn empty_result_is_valid() {
        let tasks: Vec<Task> = Vec::new();
        assert!(apply(&tasks, Filter::All).is_empty());

        let tasks = vec![Task::new(1, "only low".into(), Priority::Low)];
        assert!(apply(&tasks, Filter::Only(Priority::Medium)).is_empty());
    }
}
