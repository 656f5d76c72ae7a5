use std::collections::HashSet;

use chrono::Utc;

use crate::model::task::{Priority, Task};

/// Per-tier and total counts, computed fresh from the store on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub urgent: usize,
    pub medium: usize,
    pub low: usize,
}

impl Counts {
    pub fn for_priority(&self, priority: Priority) -> usize {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// The ordered task collection, newest first.
///
/// Ids are assigned from the creation timestamp (epoch milliseconds) and
/// clamped to stay strictly above the last id handed out, so they are unique
/// and monotonically non-decreasing even within one millisecond.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskStore {
    /// Build a store from a persisted snapshot, preserving its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        TaskStore { tasks, last_id }
    }

    /// Add a task, newest first. Whitespace-only text is silently rejected
    /// (no task created, no error).
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.insert(0, Task::new(id, text.to_string(), priority));
        Some(&self.tasks[0])
    }

    /// Remove the task with this id. No-op (not an error) if absent.
    /// Returns whether a task was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove every task whose id is in `ids`, as one state transition.
    /// Ids not present in the store are ignored. Returns the removed count.
    pub fn bulk_complete(&mut self, ids: &HashSet<u64>) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !ids.contains(&t.id));
        before - self.tasks.len()
    }

    /// Full snapshot of the current ordered sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts {
            total: self.tasks.len(),
            urgent: 0,
            medium: 0,
            low: 0,
        };
        for task in &self.tasks {
            match task.priority {
                Priority::Urgent => counts.urgent += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }
        counts
    }

    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
