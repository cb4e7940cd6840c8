//! Overlap conflict detection.
//!
//! A conflict is two `Scheduled` sessions whose slots overlap on the
//! same date. Pending sessions hold only a tentative slot, completed
//! sessions no longer occupy the calendar going forward but their slot
//! stays historical, and cancelled sessions are inert — none of those
//! participate.
//!
//! Detection is side-effect free. Mutating operations on
//! [`SessionStore`](crate::store::SessionStore) run it before committing
//! and surface the blocking session to the operator as data.
//!
//! # Reference
//! Allen (1983), "Maintaining Knowledge about Temporal Intervals"

use crate::models::{Session, SessionId, TimeSlot};

/// Finds a scheduled session whose slot overlaps the candidate slot.
///
/// Scans sessions sharing the candidate's date, skipping `exclude`
/// (used when a session is re-validated against itself during a
/// reschedule). Returns the first overlapping session; when several
/// overlap, which one is returned is unspecified — callers should treat
/// the result as "some blocking session", not a particular one.
///
/// Returns `None` when the slot is free.
pub fn find_conflict<'a>(
    sessions: &'a [Session],
    slot: &TimeSlot,
    exclude: Option<SessionId>,
) -> Option<&'a Session> {
    sessions
        .iter()
        .filter(|s| s.is_scheduled())
        .filter(|s| Some(s.id) != exclude)
        .find(|s| s.slot.overlaps(slot))
}
