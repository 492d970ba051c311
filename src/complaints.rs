use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::board::{self, Board, StatusCounts};
use crate::filter::ComplaintFilter;
use crate::models::{Complaint, NewComplaint, Priority, Status};
use crate::validation::{self, ValidationError};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Complaint {0} not found")]
    NotFound(u32),
    #[error("No complaint ids left to assign")]
    IdsExhausted,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Filtered list plus its board grouping.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView<'a> {
    pub filter: &'a ComplaintFilter,
    pub complaints: Vec<&'a Complaint>,
    pub board: Board<'a>,
}

/// The session's complaint collection.
#[derive(Debug, Clone)]
pub struct ComplaintBook {
    complaints: Vec<Complaint>,
    /// `None` once the id space is used up.
    next_id: Option<u32>,
}

impl ComplaintBook {
    pub fn new(complaints: Vec<Complaint>) -> Self {
        let next_id = match complaints.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            complaints,
            next_id,
        }
    }

    pub fn all(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn get(&self, id: u32) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Complaint, BookError> {
        self.complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(BookError::NotFound(id))
    }

    pub fn view<'a>(&'a self, filter: &'a ComplaintFilter) -> BoardView<'a> {
        let complaints = filter.apply(&self.complaints);
        let board = board::group_by_status(&complaints);
        BoardView {
            filter,
            complaints,
            board,
        }
    }

    pub fn counts(&self) -> StatusCounts {
        board::status_counts(&self.complaints)
    }

    /// File a new complaint dated `today`; it starts pending with no response.
    pub fn file(&mut self, input: NewComplaint, today: NaiveDate) -> Result<u32, BookError> {
        validation::validate_new_complaint(&input)?;

        let id = self.next_id.ok_or(BookError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.complaints.push(Complaint {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            category: input.category,
            priority: input.priority.unwrap_or(Priority::Medium),
            status: Status::Pending,
            date: today,
            response: None,
            follow_ups: Vec::new(),
        });

        tracing::info!(id, category = %input.category, "complaint filed");
        Ok(id)
    }

    /// Admin reply. Sets the status and replaces the response text.
    pub fn respond(&mut self, id: u32, status: Status, message: &str) -> Result<(), BookError> {
        let complaint = self.get_mut(id)?;
        if let Err(err) = validation::validate_response(complaint.status, status, message) {
            tracing::warn!(id, from = %complaint.status, to = %status, "response rejected: {}", err);
            return Err(err.into());
        }

        let from = complaint.status;
        complaint.status = status;
        complaint.response = Some(message.trim().to_string());
        tracing::info!(id, %from, to = %status, "complaint response recorded");
        Ok(())
    }

    pub fn follow_up(&mut self, id: u32, message: &str) -> Result<(), BookError> {
        let complaint = self.get_mut(id)?;
        validation::validate_follow_up(complaint.status, message)?;
        complaint.follow_ups.push(message.trim().to_string());
        tracing::info!(id, count = complaint.follow_ups.len(), "follow-up added");
        Ok(())
    }
}
