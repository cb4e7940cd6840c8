//! Filter/search projector.
//!
//! Derives a filtered view of the session collection from optional
//! predicates: status, round, free text, and an inclusive date range.
//! All active predicates AND together; there is no union mode.
//!
//! Cancelled sessions are hidden unless the caller asks for them with
//! an explicit status predicate — the audit trail stays out of the
//! default views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Round, Session, SessionStatus};

/// Optional predicates over the session collection.
///
/// An unset field means "no restriction". Free text matches
/// case-insensitively as a substring of the candidate name or the
/// position; it is not tokenized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFilter {
    /// Status to match. Unset hides cancelled sessions only.
    pub status: Option<SessionStatus>,
    /// Interview stage to match.
    pub round: Option<Round>,
    /// Free-text query against candidate or position.
    pub text: Option<String>,
    /// Earliest session date, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest session date, inclusive.
    pub date_to: Option<NaiveDate>,
}

impl SessionFilter {
    /// Creates an unrestricted filter (everything except cancelled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one status. `Some(Cancelled)` surfaces the
    /// otherwise-hidden audit trail.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one interview stage.
    pub fn with_round(mut self, round: Round) -> Self {
        self.round = Some(round);
        self
    }

    /// Sets the free-text query. An empty query is no restriction.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the earliest date, inclusive.
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Sets the latest date, inclusive.
    pub fn until_date(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether a session passes every active predicate.
    pub fn matches(&self, session: &Session) -> bool {
        let status_ok = match self.status {
            Some(status) => session.status == status,
            None => session.is_active(),
        };
        if !status_ok {
            return false;
        }

        if let Some(round) = self.round {
            if session.round != round {
                return false;
            }
        }

        if let Some(text) = self.text.as_deref() {
            if !text.is_empty() && !text_matches(session, text) {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if session.slot.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if session.slot.date > to {
                return false;
            }
        }

        true
    }

    /// Applies the filter, preserving the collection's natural order.
    pub fn apply<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        sessions.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Case-insensitive substring match against candidate or position.
fn text_matches(session: &Session, query: &str) -> bool {
    let query = query.to_lowercase();
    session.candidate.to_lowercase().contains(&query)
        || session.position.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionDraft, SessionId, TimeSlot};

    fn session(
        id: u64,
        candidate: &str,
        position: &str,
        date: &str,
        round: Round,
        status: SessionStatus,
    ) -> Session {
        let slot = TimeSlot::parse(date, "10:00", 60).unwrap();
        let mut s = SessionDraft::new(candidate, slot)
            .with_position(position)
            .with_round(round)
            .into_session(SessionId(id));
        s.status = status;
        s
    }

    fn sample_sessions() -> Vec<Session> {
        vec![
            session(
                1,
                "Ahmad Hassan",
                "Math Teacher",
                "2024-01-20",
                Round::Technical,
                SessionStatus::Scheduled,
            ),
            session(
                2,
                "Lina Khalil",
                "Physics Teacher",
                "2024-01-21",
                Round::Screening,
                SessionStatus::Scheduled,
            ),
            session(
                3,
                "Omar Saleh",
                "Math Teacher",
                "2024-01-22",
                Round::Technical,
                SessionStatus::Completed,
            ),
            session(
                4,
                "Sara Ahmad",
                "Chemistry Teacher",
                "2024-01-23",
                Round::Technical,
                SessionStatus::Cancelled,
            ),
        ]
    }

    #[test]
    fn test_unrestricted_filter_hides_cancelled_only() {
        let sessions = sample_sessions();
        let view = SessionFilter::new().apply(&sessions);
        let ids: Vec<u64> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_explicit_cancelled_status_surfaces_audit_trail() {
        let sessions = sample_sessions();
        let view = SessionFilter::new()
            .with_status(SessionStatus::Cancelled)
            .apply(&sessions);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, SessionId(4));
    }

    #[test]
    fn test_predicates_and_together() {
        // status=scheduled AND round=technical AND text="ahmad"
        let sessions = sample_sessions();
        let view = SessionFilter::new()
            .with_status(SessionStatus::Scheduled)
            .with_round(Round::Technical)
            .with_text("ahmad")
            .apply(&sessions);
        let ids: Vec<u64> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_text_match_is_case_insensitive_on_both_fields() {
        let sessions = sample_sessions();

        let by_name = SessionFilter::new().with_text("AHMAD").apply(&sessions);
        // "Sara Ahmad" also matches but is cancelled, so only session 1
        // survives the default hiding
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, SessionId(1));

        let by_position = SessionFilter::new().with_text("physics").apply(&sessions);
        assert_eq!(by_position.len(), 1);
        assert_eq!(by_position[0].id, SessionId(2));
    }

    #[test]
    fn test_empty_text_is_no_restriction() {
        let sessions = sample_sessions();
        let view = SessionFilter::new().with_text("").apply(&sessions);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_ends() {
        let sessions = sample_sessions();
        let view = SessionFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap())
            .until_date(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap())
            .apply(&sessions);
        let ids: Vec<u64> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_open_ended_date_range() {
        let sessions = sample_sessions();
        let view = SessionFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap())
            .apply(&sessions);
        let ids: Vec<u64> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![3]); // 4 is cancelled
    }

    #[test]
    fn test_natural_order_preserved() {
        let sessions = sample_sessions();
        let view = SessionFilter::new()
            .with_round(Round::Technical)
            .apply(&sessions);
        let ids: Vec<u64> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 3]); // insertion order, no implicit sort
    }
}
