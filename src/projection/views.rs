//! List and calendar view aggregation.
//!
//! Pure reshaping of an already-filtered session set. The list view
//! keeps the set's natural order; the calendar view buckets sessions by
//! date (ascending) and sorts each bucket by start time. Dates with no
//! sessions after filtering produce no bucket at all.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Session;

/// One calendar bucket: a date and its sessions in start-time order.
#[derive(Debug, Clone)]
pub struct CalendarDay<'a> {
    /// Bucket date.
    pub date: NaiveDate,
    /// Sessions on this date, ascending by start time. Never empty.
    pub sessions: Vec<&'a Session>,
}

/// The flat chronological list view.
///
/// Deliberately applies no sort: the filtered set's natural (insertion)
/// order is the list order.
pub fn list_view<'a>(filtered: &[&'a Session]) -> Vec<&'a Session> {
    filtered.to_vec()
}

/// The date-grouped calendar view.
///
/// Buckets ascend by date; within a bucket sessions ascend by start
/// time (ties keep their relative input order). Every input session
/// lands in exactly one bucket, so the union of all buckets equals the
/// filtered set.
pub fn calendar_view<'a>(filtered: &[&'a Session]) -> Vec<CalendarDay<'a>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&'a Session>> = BTreeMap::new();
    for &session in filtered {
        buckets.entry(session.slot.date).or_default().push(session);
    }

    buckets
        .into_iter()
        .map(|(date, mut sessions)| {
            sessions.sort_by_key(|s| s.slot.time);
            CalendarDay { date, sessions }
        })
        .collect()
}
