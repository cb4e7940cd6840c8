//! Time slot model.
//!
//! Defines a session's temporal footprint: a calendar date, a start
//! time, and a duration in minutes.
//!
//! # Time Model
//! All sessions share one implicit timezone; no conversion is performed.
//! A slot occupies the half-open interval `[start, end)` — a slot ending
//! at 10:00 and one starting at 10:00 never collide.
//!
//! # Midnight
//! Slots never span midnight: two slots on different dates are disjoint
//! by definition, and the overlap check short-circuits on the date.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::store::ScheduleError;

/// Durations offered by the scheduling form (minutes).
pub const DURATION_MENU: [u32; 6] = [15, 30, 45, 60, 90, 120];

/// Wire format for slot dates (`2024-01-20`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for slot times (24-hour `14:30`).
pub const TIME_FORMAT: &str = "%H:%M";

/// A session's time slot: date + start time + duration.
///
/// Occupies the half-open interval `[start, end)` within its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Calendar date (no time component).
    pub date: NaiveDate,
    /// Start time within the date.
    pub time: NaiveTime,
    /// Duration in minutes. Always positive.
    pub duration_min: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(date: NaiveDate, time: NaiveTime, duration_min: u32) -> Self {
        Self {
            date,
            time,
            duration_min,
        }
    }

    /// Parses a slot from operator input (`YYYY-MM-DD`, 24-hour `HH:MM`).
    pub fn parse(date: &str, time: &str, duration_min: u32) -> Result<Self, ScheduleError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| ScheduleError::InvalidDate(date.trim().to_string()))?;
        let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
            .map_err(|_| ScheduleError::InvalidTime(time.trim().to_string()))?;
        Ok(Self::new(date, time, duration_min))
    }

    /// Interval start (date + time combined).
    #[inline]
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Interval end (start + duration, exclusive).
    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::minutes(i64::from(self.duration_min))
    }

    /// Whether two slots overlap.
    ///
    /// Slots on different dates never overlap. On the same date the check
    /// is `a.start < b.end && b.start < a.end`, so touching endpoints
    /// (one slot ending exactly when the other starts) do not overlap —
    /// back-to-back sessions are always valid.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.date != other.date {
            return false;
        }
        self.start() < other.end() && other.start() < self.end()
    }

    /// Whether the duration is one the scheduling form offers.
    pub fn has_menu_duration(&self) -> bool {
        DURATION_MENU.contains(&self.duration_min)
    }
}
