//! In-memory session store and mutation engine.
//!
//! Owns the session collection and applies every state change:
//! create, confirm, reschedule, cancel, complete. Each mutation runs to
//! completion before the next is processed — the store assumes a single
//! logical writer (wrap it in a mutex or an actor if embedding it in a
//! networked service).
//!
//! # Conflict Guarding
//!
//! Mutations that would place a session on the calendar (`create` of a
//! scheduled draft, `confirm`, `reschedule`) run
//! [`find_conflict`](crate::conflict::find_conflict) first and commit
//! nothing on a hit. The blocking session comes back inside
//! [`ScheduleError::Conflict`] so the caller can render an inline
//! warning and let the operator adjust and resubmit.
//!
//! # Persistence
//!
//! The store is handed an initial collection
//! ([`SessionStore::with_sessions`]) and expects the embedding
//! application to persist mutations downstream; it keeps no durable
//! state of its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conflict::find_conflict;
use crate::models::{Feedback, Session, SessionDraft, SessionId, SessionStatus, SlotChange};

/// Scheduling engine errors.
///
/// Every variant is recoverable data, never a panic. `Conflict` is the
/// expected, operator-facing case; its message names the blocking
/// candidate and slot for inline display.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ScheduleError {
    /// The requested slot overlaps an existing scheduled session.
    #[error(
        "slot conflicts with the interview for '{}' on {} at {} ({} min)",
        .with.candidate, .with.slot.date, .with.slot.time, .with.slot.duration_min
    )]
    Conflict {
        /// Snapshot of the blocking session.
        with: Box<Session>,
    },

    /// No session with this id exists.
    #[error("session {0} not found")]
    NotFound(SessionId),

    /// The session's current status does not permit the operation.
    #[error("operation not valid for a '{}' session", .from.as_str())]
    InvalidTransition {
        /// Status the session held when the operation was attempted.
        from: SessionStatus,
    },

    /// Operator-supplied date string did not parse.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Operator-supplied time string did not parse.
    #[error("invalid time '{0}' (expected 24-hour HH:MM)")]
    InvalidTime(String),
}

/// In-memory session collection with guarded mutations.
///
/// Ids come from a monotonic counter that never reuses a value, even
/// after cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStore {
    sessions: Vec<Session>,
    next_id: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store seeded from a persisted collection.
    ///
    /// The id counter resumes past the highest seeded id, so ids stay
    /// unique across restarts.
    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        let next_id = sessions.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        Self { sessions, next_id }
    }

    /// Creates a session from a draft.
    ///
    /// Scheduled drafts are conflict-checked first; on a hit nothing is
    /// mutated and the blocking session is returned in the error.
    /// Tentative drafts (see [`SessionDraft::tentative`]) enter as
    /// `Pending` without a check — their slot does not occupy the
    /// calendar until [`confirm`](Self::confirm).
    pub fn create(&mut self, draft: SessionDraft) -> Result<SessionId, ScheduleError> {
        if draft.scheduled {
            if let Some(hit) = find_conflict(&self.sessions, &draft.slot, None) {
                return Err(ScheduleError::Conflict {
                    with: Box::new(hit.clone()),
                });
            }
        }
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.push(draft.into_session(id));
        Ok(id)
    }

    /// Confirms a pending session: `Pending → Scheduled`.
    ///
    /// This is the one place the pending conflict exemption ends — the
    /// tentative slot is validated against the calendar before the
    /// session starts occupying it.
    pub fn confirm(&mut self, id: SessionId) -> Result<(), ScheduleError> {
        let (status, slot) = {
            let session = self.get(id).ok_or(ScheduleError::NotFound(id))?;
            (session.status, session.slot)
        };
        if status != SessionStatus::Pending {
            return Err(ScheduleError::InvalidTransition { from: status });
        }
        if let Some(hit) = find_conflict(&self.sessions, &slot, Some(id)) {
            return Err(ScheduleError::Conflict {
                with: Box::new(hit.clone()),
            });
        }
        self.session_mut(id)?.status = SessionStatus::Scheduled;
        Ok(())
    }

    /// Moves a session to a new slot.
    ///
    /// Fields omitted from `change` keep their current value. Scheduled
    /// sessions are re-validated against the calendar excluding
    /// themselves, so rescheduling to the identical slot always
    /// succeeds. Status is untouched; completed and cancelled sessions
    /// cannot move.
    pub fn reschedule(&mut self, id: SessionId, change: SlotChange) -> Result<(), ScheduleError> {
        let (status, current) = {
            let session = self.get(id).ok_or(ScheduleError::NotFound(id))?;
            (session.status, session.slot)
        };
        match status {
            SessionStatus::Scheduled | SessionStatus::Pending => {}
            other => return Err(ScheduleError::InvalidTransition { from: other }),
        }

        let target = change.apply_to(&current);
        if status == SessionStatus::Scheduled {
            if let Some(hit) = find_conflict(&self.sessions, &target, Some(id)) {
                return Err(ScheduleError::Conflict {
                    with: Box::new(hit.clone()),
                });
            }
        }
        self.session_mut(id)?.slot = target;
        Ok(())
    }

    /// Cancels a session.
    ///
    /// The session is retained with status `Cancelled` as an audit
    /// trail; default projections hide it. Cancelling an already
    /// cancelled session is a no-op. Removal can never create a
    /// conflict, so no check runs.
    pub fn cancel(&mut self, id: SessionId) -> Result<(), ScheduleError> {
        let session = self.session_mut(id)?;
        session.status = SessionStatus::Cancelled;
        Ok(())
    }

    /// Completes a scheduled session, attaching feedback.
    ///
    /// Only `Scheduled` sessions can complete. A second completion
    /// attempt is rejected and the stored feedback stays exactly as
    /// first submitted — feedback is read-only once attached.
    pub fn complete(&mut self, id: SessionId, feedback: Feedback) -> Result<(), ScheduleError> {
        let session = self.session_mut(id)?;
        if session.status != SessionStatus::Scheduled {
            return Err(ScheduleError::InvalidTransition {
                from: session.status,
            });
        }
        session.feedback = Some(feedback);
        session.status = SessionStatus::Completed;
        Ok(())
    }

    /// Looks up a session by id.
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// All sessions, cancelled included, in insertion order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Sessions that still matter to the default views (not cancelled).
    pub fn active_sessions(&self) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.is_active()).collect()
    }

    /// Number of sessions, cancelled included.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions at all.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session, ScheduleError> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ScheduleError::NotFound(id))
    }
}
