use serde::Serialize;

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Completion percentage of `tasks`; an empty list is 0%.
pub fn progress(tasks: &[Task]) -> f64 {
    summarize(tasks).percent
}

pub fn summarize(tasks: &[Task]) -> Progress {
    let completed = tasks.iter().filter(|t| t.done).count();
    let total = tasks.len();
    let percent = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    Progress {
        completed,
        total,
        percent,
    }
}
