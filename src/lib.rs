//! Campus services board
//!
//! In-memory cores behind the student dashboard:
//!
//! - **Complaint board**: category / status / search filtering and
//!   grouping into status columns ([`filter`], [`board`], [`complaints`])
//! - **Study planner**: day-indexed tasks with completion toggling and
//!   progress ([`schedule`], [`progress`])
//! - **Study assistant transcript** with scripted replies ([`chat`])

pub mod board;
pub mod chat;
pub mod complaints;
pub mod config;
pub mod filter;
pub mod models;
pub mod progress;
pub mod report;
pub mod schedule;
pub mod seed;
pub mod validation;
