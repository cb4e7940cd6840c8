//! Scheduling domain models.
//!
//! Core data types for interview scheduling: the session entity with its
//! lifecycle status and feedback, and the time slot it occupies.
//!
//! # Time Representation
//!
//! Slots are a calendar date plus an intraday start time and a duration
//! in minutes. All sessions share one implicit timezone and never span
//! midnight.

mod session;
mod slot;

pub use session::{
    Feedback, InterviewKind, Round, Session, SessionDraft, SessionId, SessionStatus, SlotChange,
};
pub use slot::{TimeSlot, DATE_FORMAT, DURATION_MENU, TIME_FORMAT};
