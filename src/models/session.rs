//! Interview session model.
//!
//! A session links a candidate, a time slot, and a set of interviewers,
//! and carries the lifecycle status plus post-interview feedback.
//!
//! # Lifecycle
//!
//! ```text
//! Pending ──confirm──▶ Scheduled ──complete──▶ Completed
//!                        │    ▲
//!                        └────┘ reschedule
//! (any non-completed) ──cancel──▶ Cancelled (retained)
//! ```
//!
//! Cancelled sessions stay in the store as an audit trail; the default
//! projections hide them. There is no reopening path out of `Completed`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Unique session identifier.
///
/// Assigned by the store from a monotonic counter; stable for the
/// lifetime of the session and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interview stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    Screening,
    Technical,
    Demo,
    Hr,
    Final,
}

impl Round {
    /// Wire/export name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Screening => "screening",
            Round::Technical => "technical",
            Round::Demo => "demo",
            Round::Hr => "hr",
            Round::Final => "final",
        }
    }
}

/// How the interview is conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewKind {
    Video,
    Phone,
    Onsite,
}

impl InterviewKind {
    /// Wire/export name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewKind::Video => "video",
            InterviewKind::Phone => "phone",
            InterviewKind::Onsite => "onsite",
        }
    }
}

/// Session lifecycle status.
///
/// Only `Scheduled` sessions occupy a confirmed calendar position and
/// participate in conflict checks. A `Pending` session's slot is
/// tentative; `Cancelled` sessions are retained but inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Wire/export name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

/// Post-interview feedback: four 1–5 ratings plus free-text comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Technical skill rating (1–5).
    pub technical_skills: u8,
    /// Communication rating (1–5).
    pub communication: u8,
    /// Teaching ability rating (1–5).
    pub teaching_ability: u8,
    /// Culture fit rating (1–5).
    pub culture_fit: u8,
    /// Free-text comments.
    pub comments: String,
}

impl Feedback {
    /// Creates feedback from the four ratings.
    pub fn new(technical_skills: u8, communication: u8, teaching_ability: u8, culture_fit: u8) -> Self {
        Self {
            technical_skills,
            communication,
            teaching_ability,
            culture_fit,
            comments: String::new(),
        }
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Overall score: arithmetic mean of the four ratings.
    pub fn overall_score(&self) -> f64 {
        f64::from(
            u32::from(self.technical_skills)
                + u32::from(self.communication)
                + u32::from(self.teaching_ability)
                + u32::from(self.culture_fit),
        ) / 4.0
    }
}

/// An interview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, immutable once assigned.
    pub id: SessionId,
    /// Candidate name.
    pub candidate: String,
    /// Position interviewed for.
    pub position: String,
    /// Time slot. Tentative while the session is `Pending`.
    pub slot: TimeSlot,
    /// Interview stage.
    pub round: Round,
    /// Interview medium.
    pub kind: InterviewKind,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Interviewer names. Set semantics; insertion order irrelevant.
    pub interviewers: BTreeSet<String>,
    /// Room or meeting link.
    pub location: String,
    /// Free-text notes.
    pub notes: String,
    /// Attached when the session completes; read-only thereafter.
    pub feedback: Option<Feedback>,
}

impl Session {
    /// Whether this session still matters to the default views.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status != SessionStatus::Cancelled
    }

    /// Whether this session occupies a confirmed calendar position.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.status == SessionStatus::Scheduled
    }
}

/// Input carrier for creating a session.
///
/// Built with `new` + `with_*`, then handed to
/// [`SessionStore::create`](crate::store::SessionStore::create), which
/// assigns the id and runs the conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDraft {
    /// Candidate name. Required.
    pub candidate: String,
    /// Position interviewed for.
    pub position: String,
    /// Requested time slot.
    pub slot: TimeSlot,
    /// Interview stage.
    pub round: Round,
    /// Interview medium.
    pub kind: InterviewKind,
    /// Interviewer names.
    pub interviewers: BTreeSet<String>,
    /// Room or meeting link.
    pub location: String,
    /// Free-text notes.
    pub notes: String,
    /// When false the session is created `Pending` (tentative slot,
    /// exempt from conflict checks until confirmed).
    pub scheduled: bool,
}

impl SessionDraft {
    /// Creates a draft for a confirmed (`Scheduled`) session.
    pub fn new(candidate: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            candidate: candidate.into(),
            position: String::new(),
            slot,
            round: Round::Screening,
            kind: InterviewKind::Video,
            interviewers: BTreeSet::new(),
            location: String::new(),
            notes: String::new(),
            scheduled: true,
        }
    }

    /// Marks the draft tentative: the session is created `Pending`.
    pub fn tentative(mut self) -> Self {
        self.scheduled = false;
        self
    }

    /// Sets the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the interview stage.
    pub fn with_round(mut self, round: Round) -> Self {
        self.round = round;
        self
    }

    /// Sets the interview medium.
    pub fn with_kind(mut self, kind: InterviewKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds an interviewer.
    pub fn with_interviewer(mut self, name: impl Into<String>) -> Self {
        self.interviewers.insert(name.into());
        self
    }

    /// Sets the location (room or meeting link).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Materializes the session under the given id.
    pub(crate) fn into_session(self, id: SessionId) -> Session {
        let status = if self.scheduled {
            SessionStatus::Scheduled
        } else {
            SessionStatus::Pending
        };
        Session {
            id,
            candidate: self.candidate,
            position: self.position,
            slot: self.slot,
            round: self.round,
            kind: self.kind,
            status,
            interviewers: self.interviewers,
            location: self.location,
            notes: self.notes,
            feedback: None,
        }
    }
}

/// Partial slot update for rescheduling.
///
/// Omitted fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SlotChange {
    /// New date, if changing.
    pub date: Option<chrono::NaiveDate>,
    /// New start time, if changing.
    pub time: Option<chrono::NaiveTime>,
    /// New duration in minutes, if changing.
    pub duration_min: Option<u32>,
}

impl SlotChange {
    /// Creates an empty change (reschedule to the same slot).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new date.
    pub fn with_date(mut self, date: chrono::NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the new start time.
    pub fn with_time(mut self, time: chrono::NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the new duration.
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = Some(duration_min);
        self
    }

    /// Merges this change over an existing slot.
    pub fn apply_to(&self, current: &TimeSlot) -> TimeSlot {
        TimeSlot {
            date: self.date.unwrap_or(current.date),
            time: self.time.unwrap_or(current.time),
            duration_min: self.duration_min.unwrap_or(current.duration_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slot() -> TimeSlot {
        TimeSlot::parse("2024-01-20", "10:00", 60).unwrap()
    }

    #[test]
    fn test_draft_builder() {
        let draft = SessionDraft::new("Ahmad Hassan", sample_slot())
            .with_position("Math Teacher")
            .with_round(Round::Technical)
            .with_kind(InterviewKind::Onsite)
            .with_interviewer("Sara")
            .with_interviewer("Omar")
            .with_location("Room 204")
            .with_notes("bring portfolio");

        assert_eq!(draft.candidate, "Ahmad Hassan");
        assert_eq!(draft.position, "Math Teacher");
        assert_eq!(draft.round, Round::Technical);
        assert_eq!(draft.interviewers.len(), 2);
        assert!(draft.scheduled);

        let session = draft.into_session(SessionId(1));
        assert_eq!(session.status, SessionStatus::Scheduled);
        assert!(session.feedback.is_none());
    }

    #[test]
    fn test_tentative_draft_is_pending() {
        let session = SessionDraft::new("Lina", sample_slot())
            .tentative()
            .into_session(SessionId(7));
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(!session.is_scheduled());
        assert!(session.is_active());
    }

    #[test]
    fn test_interviewers_are_a_set() {
        let draft = SessionDraft::new("Lina", sample_slot())
            .with_interviewer("Sara")
            .with_interviewer("Sara");
        assert_eq!(draft.interviewers.len(), 1);
    }

    #[test]
    fn test_overall_score_boundaries() {
        assert_eq!(Feedback::new(1, 1, 1, 1).overall_score(), 1.0);
        assert_eq!(Feedback::new(5, 5, 5, 5).overall_score(), 5.0);
        assert_eq!(Feedback::new(4, 5, 4, 4).overall_score(), 4.25);
    }

    #[test]
    fn test_slot_change_merge() {
        let current = sample_slot();
        let change = SlotChange::new().with_time(chrono::NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        let merged = change.apply_to(&current);
        assert_eq!(merged.date, current.date);
        assert_eq!(merged.time, chrono::NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(merged.duration_min, 60);

        // Empty change reproduces the current slot
        assert_eq!(SlotChange::new().apply_to(&current), current);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(SessionStatus::Scheduled.as_str(), "scheduled");
        assert_eq!(Round::Hr.as_str(), "hr");
        assert_eq!(InterviewKind::Video.as_str(), "video");
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = SessionDraft::new("Ahmad", sample_slot())
            .with_position("Physics Teacher")
            .with_round(Round::Final)
            .into_session(SessionId(3));

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"status\":\"scheduled\""));
        assert!(json.contains("\"round\":\"final\""));

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
