use serde::Serialize;

use crate::model::task::{Priority, Task};
use crate::ops::store::Counts;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    pub priority: Priority,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id,
            text: task.text.clone(),
            priority: task.priority,
        }
    }
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub filter: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CountsJson {
    pub total: usize,
    pub urgent: usize,
    pub medium: usize,
    pub low: usize,
}

impl From<Counts> for CountsJson {
    fn from(c: Counts) -> Self {
        CountsJson {
            total: c.total,
            urgent: c.urgent,
            medium: c.medium,
            low: c.low,
        }
    }
}

#[derive(Serialize)]
pub struct DoneJson {
    pub completed: usize,
    pub remaining: usize,
}
