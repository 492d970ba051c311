//! Day-indexed study plan.
//!
//! Days are addressed by position. Out-of-range day indices and unknown task
//! ids are not errors: selection clamps and toggling becomes a no-op.

use serde::Serialize;

use crate::models::{Day, Task};
use crate::progress::{self, Progress};

/// Buttons on the weekly strip, Monday first.
pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Strip position of a weekday given as `Mon`, `monday`, `TUE`, ...
pub fn weekday_index(name: &str) -> Option<usize> {
    let name = name.trim();
    if name.len() < 3 || !name.is_char_boundary(3) {
        return None;
    }
    WEEK_DAYS
        .iter()
        .position(|day| day.eq_ignore_ascii_case(&name[..3]))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    days: Vec<Day>,
}

/// Selected day ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct DayView<'a> {
    pub index: usize,
    pub day: &'a str,
    pub date: &'a str,
    pub tasks: &'a [Task],
    pub progress: Progress,
}

impl Schedule {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Clamp `index` into `[0, day_count - 1]`. An empty schedule yields 0.
    pub fn select_day(&self, index: i64) -> usize {
        let last = self.days.len().saturating_sub(1);
        if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(last, |i| i.min(last))
        }
    }

    /// Weekly strip click; days past the end of the plan land on the last day.
    pub fn week_strip_select(&self, weekday: usize) -> usize {
        self.select_day(i64::try_from(weekday).unwrap_or(i64::MAX))
    }

    pub fn tasks(&self, day_index: usize) -> &[Task] {
        self.days
            .get(day_index)
            .map(|d| d.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Flip `done` on the task with `task_id` in the given day. Returns false
    /// and changes nothing when either is unknown.
    pub fn toggle_task(&mut self, day_index: usize, task_id: u32) -> bool {
        let Some(day) = self.days.get_mut(day_index) else {
            tracing::debug!(day_index, task_id, "toggle ignored: no such day");
            return false;
        };
        let Some(task) = day.tasks.iter_mut().find(|t| t.id == task_id) else {
            tracing::debug!(day_index, task_id, "toggle ignored: task not in day");
            return false;
        };

        task.done = !task.done;
        tracing::info!(day = %day.day, task_id, done = task.done, "task toggled");
        true
    }

    pub fn day_view(&self, index: i64) -> DayView<'_> {
        let index = self.select_day(index);
        match self.days.get(index) {
            Some(day) => DayView {
                index,
                day: &day.day,
                date: &day.date,
                tasks: &day.tasks,
                progress: progress::summarize(&day.tasks),
            },
            None => DayView {
                index,
                day: "Today",
                date: "",
                tasks: &[],
                progress: Progress::default(),
            },
        }
    }
}
