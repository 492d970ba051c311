use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;

use crate::models::{
    Category, ChatMessage, ChatRole, Complaint, Day, Priority, Status, Suggestion, SuggestionKind,
    Task,
};
use crate::schedule::Schedule;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_complaints() -> Vec<Complaint> {
    let rows = [
        (
            1,
            "Library AC not working",
            "The air conditioning in the main library has been broken for 3 days. It's very uncomfortable to study.",
            Category::Infrastructure,
            Priority::High,
            Status::Pending,
            date(2025, 12, 22),
            None,
        ),
        (
            2,
            "Cafeteria food quality",
            "The quality of food in the main cafeteria has declined significantly. Several students have reported stomach issues.",
            Category::FoodAndDining,
            Priority::High,
            Status::InProgress,
            date(2025, 12, 20),
            Some("We have initiated an inspection of the cafeteria. A food safety team will visit tomorrow."),
        ),
        (
            3,
            "Parking space shortage",
            "There are not enough parking spaces for students. Many have to park far away.",
            Category::Facilities,
            Priority::Medium,
            Status::InProgress,
            date(2025, 12, 18),
            Some("We are exploring options for additional parking. A temporary lot is being set up."),
        ),
        (
            4,
            "Broken projector in Room 204",
            "The projector in lecture room 204 is not working properly. The image is very dim.",
            Category::Equipment,
            Priority::Medium,
            Status::Resolved,
            date(2025, 12, 15),
            Some("The projector has been replaced. Thank you for reporting this issue."),
        ),
        (
            5,
            "Wi-Fi connectivity issues",
            "The Wi-Fi in the engineering building drops frequently, making it hard to attend online classes.",
            Category::ItServices,
            Priority::High,
            Status::Resolved,
            date(2025, 12, 12),
            Some("Network equipment has been upgraded. Please report if issues persist."),
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, description, category, priority, status, date, response)| Complaint {
                id,
                title: title.to_string(),
                description: description.to_string(),
                category,
                priority,
                status,
                date,
                response: response.map(str::to_string),
                follow_ups: Vec::new(),
            },
        )
        .collect()
}

fn task(id: u32, time: &str, subject: &str, topic: &str, done: bool, priority: Priority) -> Task {
    Task {
        id,
        time: time.to_string(),
        subject: subject.to_string(),
        topic: topic.to_string(),
        done,
        priority,
    }
}

pub fn study_plan() -> Schedule {
    Schedule::new(vec![
        Day {
            day: "Monday".to_string(),
            date: "Dec 23".to_string(),
            tasks: vec![
                task(1, "09:00 - 10:30", "Mathematics", "Calculus - Integration", true, Priority::High),
                task(2, "11:00 - 12:30", "Physics", "Wave Mechanics", true, Priority::Medium),
                task(3, "14:00 - 15:30", "Computer Science", "Data Structures", false, Priority::High),
                task(4, "16:00 - 17:00", "English", "Essay Writing", false, Priority::Low),
            ],
        },
        Day {
            day: "Tuesday".to_string(),
            date: "Dec 24".to_string(),
            tasks: vec![
                task(5, "09:00 - 11:00", "Physics", "Thermodynamics Lab", false, Priority::High),
                task(6, "13:00 - 14:30", "Mathematics", "Linear Algebra", false, Priority::Medium),
                task(7, "15:00 - 16:30", "CS", "Algorithm Analysis", false, Priority::High),
            ],
        },
        Day {
            day: "Wednesday".to_string(),
            date: "Dec 25".to_string(),
            tasks: vec![
                task(8, "10:00 - 12:00", "Revision", "Mathematics Practice Problems", false, Priority::High),
                task(9, "14:00 - 16:00", "Project", "CS Project Work", false, Priority::Medium),
            ],
        },
    ])
}

pub fn study_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            kind: SuggestionKind::Tip,
            message: "Based on your performance, consider spending more time on Physics - Wave Mechanics.".to_string(),
        },
        Suggestion {
            kind: SuggestionKind::Schedule,
            message: "Your peak focus hours are 9-11 AM. Important tasks are scheduled during this time.".to_string(),
        },
        Suggestion {
            kind: SuggestionKind::Break,
            message: "Don't forget to take short breaks! The Pomodoro technique can boost your productivity.".to_string(),
        },
    ]
}

/// Opening transcript, addressed to `student_name`.
pub fn opening_chat(student_name: &str) -> Vec<ChatMessage> {
    let lines = [
        (
            ChatRole::Assistant,
            format!(
                "Hi {student_name}! I'm your study assistant. I've gone through your exam schedule and put together a study plan. Would you like me to explain the priorities?"
            ),
        ),
        (
            ChatRole::Student,
            "Yes, please explain why Mathematics is scheduled first.".to_string(),
        ),
        (
            ChatRole::Assistant,
            "Mathematics comes first because:\n\n1. Your exam is in 5 days\n2. Calculus requires consistent practice\n3. Your morning focus is typically higher\n\nWould you like me to adjust anything?".to_string(),
        ),
    ];

    lines
        .into_iter()
        .zip(1u64..)
        .map(|((role, content), seq)| ChatMessage { seq, role, content })
        .collect()
}

/// Load complaints from a CSV file with the header
/// `id,title,description,category,priority,status,date,response`.
pub fn import_complaints_csv(csv_path: &Path) -> anyhow::Result<Vec<Complaint>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        id: u32,
        title: String,
        description: String,
        category: String,
        priority: String,
        status: String,
        date: NaiveDate,
        response: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut seen = HashSet::new();
    let mut complaints = Vec::new();

    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let invalid_row = || format!("invalid row {} in {}", line + 1, csv_path.display());
        let row = result.with_context(invalid_row)?;
        if !seen.insert(row.id) {
            bail!("duplicate complaint id {} in {}", row.id, csv_path.display());
        }

        complaints.push(Complaint {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category.parse::<Category>().with_context(invalid_row)?,
            priority: row.priority.parse::<Priority>().with_context(invalid_row)?,
            status: row.status.parse::<Status>().with_context(invalid_row)?,
            date: row.date,
            response: row.response.filter(|r| !r.trim().is_empty()),
            follow_ups: Vec::new(),
        });
    }

    tracing::info!(count = complaints.len(), path = %csv_path.display(), "imported complaints");
    Ok(complaints)
}
