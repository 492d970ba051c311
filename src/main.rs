use std::path::PathBuf;

use anyhow::Context;
use campus_board::chat::Transcript;
use campus_board::complaints::ComplaintBook;
use campus_board::config::Config;
use campus_board::filter::{CategoryFilter, ComplaintFilter};
use campus_board::models::{Category, ChatRole, NewComplaint, Priority, Status};
use campus_board::{config, report, schedule, seed};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "campus-board")]
#[command(about = "Complaint board and study planner for campus services", long_about = None)]
struct Cli {
    /// Load complaints from this CSV instead of the sample set
    #[arg(long, global = true)]
    complaints_csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered complaint board
    Board {
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
        /// Status card clicks, applied in order as toggles
        #[arg(long)]
        status: Vec<Status>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        json: bool,
    },
    /// Complaint totals per status
    Counts,
    /// Show one complaint in full
    Show { id: u32 },
    /// File a new complaint
    File {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        description: String,
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Record an admin response
    Respond {
        id: u32,
        #[arg(long)]
        status: Status,
        #[arg(long)]
        message: String,
    },
    /// Add a follow-up message to an open complaint
    FollowUp {
        id: u32,
        #[arg(long)]
        message: String,
    },
    /// Show a day of the study plan
    Plan {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        day: i64,
        /// Pick the day from the weekly strip instead (Mon..Sun)
        #[arg(long, conflicts_with = "day")]
        weekday: Option<String>,
        /// Task ids to toggle on the selected day
        #[arg(long)]
        toggle: Vec<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Talk to the study assistant
    Chat { messages: Vec<String> },
    /// Write a Markdown report of the board and a plan day
    Report {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        day: i64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let theme = config::init(&config);
    tracing::debug!(?theme, "configuration loaded");

    let complaints = match &cli.complaints_csv {
        Some(path) => seed::import_complaints_csv(path)?,
        None => seed::sample_complaints(),
    };
    let mut book = ComplaintBook::new(complaints);

    match cli.command {
        Commands::Board {
            category,
            status,
            search,
            json,
        } => {
            let mut filter = ComplaintFilter::default();
            filter.set_category(category);
            for s in status {
                filter.toggle_status(s);
            }
            filter.set_search(search);

            let view = book.view(&filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", report::build_board_report(&view, &book.counts()));
            }
        }
        Commands::Counts => {
            let counts = book.counts();
            for status in Status::ORDER {
                println!("{}: {}", status.label(), counts.get(status));
            }
            println!("Total: {}", counts.total());
        }
        Commands::Show { id } => {
            let complaint = book
                .get(id)
                .with_context(|| format!("complaint {id} not found"))?;
            println!("#{} {}", complaint.id, complaint.title);
            println!(
                "{} | {} | {} priority | {}",
                complaint.status.label(),
                complaint.category,
                complaint.priority,
                complaint.display_date()
            );
            println!();
            println!("{}", complaint.description);
            if let Some(response) = &complaint.response {
                println!();
                println!("Admin response: {response}");
            }
            for note in &complaint.follow_ups {
                println!("Follow-up: {note}");
            }
        }
        Commands::File {
            title,
            category,
            description,
            priority,
        } => {
            let today = chrono::Local::now().date_naive();
            let id = book.file(
                NewComplaint {
                    title,
                    description,
                    category,
                    priority,
                },
                today,
            )?;
            println!("Filed complaint #{id}.");
        }
        Commands::Respond {
            id,
            status,
            message,
        } => {
            book.respond(id, status, &message)?;
            println!("Complaint #{id} is now {}.", status.label());
        }
        Commands::FollowUp { id, message } => {
            book.follow_up(id, &message)?;
            println!("Follow-up added to complaint #{id}.");
        }
        Commands::Plan {
            day,
            weekday,
            toggle,
            json,
        } => {
            let mut schedule = seed::study_plan();
            let selected = match weekday {
                Some(name) => {
                    let index = schedule::weekday_index(&name)
                        .with_context(|| format!("unknown weekday '{name}'"))?;
                    schedule.week_strip_select(index)
                }
                None => schedule.select_day(day),
            };
            for task_id in toggle {
                if !schedule.toggle_task(selected, task_id) {
                    tracing::warn!(task_id, "no such task on the selected day");
                }
            }

            let view = schedule.day_view(selected as i64);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!(
                    "{}",
                    report::build_day_report(&view, &seed::study_suggestions())
                );
            }
        }
        Commands::Chat { messages } => {
            let mut transcript = Transcript::new(seed::opening_chat(&config.student_name));
            for message in &messages {
                if transcript.send(message).is_none() {
                    tracing::warn!("skipped blank message");
                }
            }

            for message in transcript.messages() {
                let speaker = match message.role {
                    ChatRole::Assistant => "Assistant",
                    ChatRole::Student => config.student_name.as_str(),
                };
                println!("[{}] {}: {}", message.seq, speaker, message.content);
            }
        }
        Commands::Report { out, day } => {
            let out = out.unwrap_or_else(|| config.report_path.clone());
            let filter = ComplaintFilter::default();
            let schedule = seed::study_plan();
            let document = report::build_report(
                &book.view(&filter),
                &book.counts(),
                &schedule.day_view(day),
                &seed::study_suggestions(),
            );
            std::fs::write(&out, document)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
