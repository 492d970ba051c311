use std::fmt::Write;

use crate::board::StatusCounts;
use crate::complaints::BoardView;
use crate::config::{self, Theme};
use crate::models::{Status, Suggestion};
use crate::schedule::DayView;

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    }
}

pub fn build_board_report(view: &BoardView<'_>, counts: &StatusCounts) -> String {
    let mut output = String::new();
    let filter = view.filter;

    let _ = writeln!(output, "## Complaint Board");
    let _ = writeln!(
        output,
        "Category: {} | Status: {} | Search: {}",
        filter.category,
        filter.status.map(Status::label).unwrap_or("Any"),
        if filter.search.is_empty() {
            "(none)"
        } else {
            filter.search.as_str()
        }
    );
    let _ = writeln!(output);

    for status in Status::ORDER {
        let _ = writeln!(output, "- {}: {}", status.label(), counts.get(status));
    }

    for (status, items) in view.board.columns() {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {} ({})", status.label(), items.len());

        if items.is_empty() {
            let _ = writeln!(output, "No complaints.");
            continue;
        }

        for complaint in items {
            let _ = writeln!(
                output,
                "- #{} {} ({}, {} priority, {})",
                complaint.id,
                complaint.title,
                complaint.category,
                complaint.priority,
                complaint.display_date()
            );
            if let Some(response) = &complaint.response {
                let _ = writeln!(output, "  - Response: {}", response);
            }
            for note in &complaint.follow_ups {
                let _ = writeln!(output, "  - Follow-up: {}", note);
            }
        }
    }

    output
}

pub fn build_day_report(view: &DayView<'_>, suggestions: &[Suggestion]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "## {}'s Progress", view.day);
    if !view.date.is_empty() {
        let _ = writeln!(output, "{}", view.date);
    }
    let _ = writeln!(
        output,
        "{}/{} tasks done ({:.0}%)",
        view.progress.completed, view.progress.total, view.progress.percent
    );
    let _ = writeln!(output);

    if view.tasks.is_empty() {
        let _ = writeln!(output, "No tasks planned.");
    } else {
        for task in view.tasks {
            let _ = writeln!(
                output,
                "- [{}] {} {}: {} ({})",
                if task.done { "x" } else { " " },
                task.time,
                task.subject,
                task.topic,
                task.priority
            );
        }
    }

    if !suggestions.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "### Suggestions");
        for suggestion in suggestions {
            let _ = writeln!(output, "- {}", suggestion.message);
        }
    }

    output
}

/// Full Markdown document: board followed by the selected day.
pub fn build_report(
    view: &BoardView<'_>,
    counts: &StatusCounts,
    day: &DayView<'_>,
    suggestions: &[Suggestion],
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "theme: {}", theme_name(config::theme()));
    let _ = writeln!(output, "---");
    let _ = writeln!(output);
    let _ = writeln!(output, "# Campus Board Report");
    let _ = writeln!(output);
    output.push_str(&build_board_report(view, counts));
    let _ = writeln!(output);
    output.push_str(&build_day_report(day, suggestions));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complaints::ComplaintBook;
    use crate::filter::ComplaintFilter;
    use crate::schedule::Schedule;
    use crate::seed;

    #[test]
    fn board_report_lists_every_column() {
        let book = ComplaintBook::new(seed::sample_complaints());
        let mut filter = ComplaintFilter::default();
        filter.toggle_status(Status::Pending);
        let report = build_board_report(&book.view(&filter), &book.counts());

        assert!(report.contains("Status: Pending"));
        assert!(report.contains("- In Progress: 2"));
        assert!(report.contains("### Pending (1)"));
        assert!(report.contains("- #1 Library AC not working (Infrastructure, high priority, Dec 22, 2025)"));
        assert!(report.contains("### Resolved (0)\nNo complaints."));
    }

    #[test]
    fn board_report_includes_responses() {
        let book = ComplaintBook::new(seed::sample_complaints());
        let filter = ComplaintFilter::default();
        let report = build_board_report(&book.view(&filter), &book.counts());
        assert!(report.contains("  - Response: The projector has been replaced."));
    }

    #[test]
    fn day_report_shows_checklist_and_progress() {
        let schedule = seed::study_plan();
        let report = build_day_report(&schedule.day_view(0), &seed::study_suggestions());
        assert!(report.starts_with("## Monday's Progress\nDec 23\n2/4 tasks done (50%)"));
        assert!(report.contains("- [x] 09:00 - 10:30 Mathematics: Calculus - Integration (high)"));
        assert!(report.contains("- [ ] 16:00 - 17:00 English: Essay Writing (low)"));
        assert!(report.contains("### Suggestions"));
    }

    #[test]
    fn empty_day_report() {
        let schedule = Schedule::default();
        let report = build_day_report(&schedule.day_view(0), &[]);
        assert!(report.contains("0/0 tasks done (0%)"));
        assert!(report.contains("No tasks planned."));
    }

    #[test]
    fn full_report_has_theme_header() {
        let book = ComplaintBook::new(seed::sample_complaints());
        let filter = ComplaintFilter::default();
        let schedule = seed::study_plan();
        let report = build_report(&book.view(&filter), &book.counts(), &schedule.day_view(0), &[]);
        assert!(report.starts_with("---\ntheme: "));
        assert!(report.contains("# Campus Board Report"));
        assert!(report.contains("## Monday's Progress"));
    }
}
