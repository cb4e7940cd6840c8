//! Read-side projections over the session store.
//!
//! Everything here is pure: filtering, debounced search input, and the
//! list/calendar view shapes are computed from the current collection
//! without mutating it. Data flows one direction — mutations go through
//! [`SessionStore`](crate::store::SessionStore), projections only read.
//!
//! # Usage
//!
//! ```
//! use interview_scheduler::models::{Round, SessionDraft, SessionStatus, TimeSlot};
//! use interview_scheduler::projection::{calendar_view, SessionFilter};
//! use interview_scheduler::store::SessionStore;
//!
//! let mut store = SessionStore::new();
//! let slot = TimeSlot::parse("2024-01-20", "10:00", 60).unwrap();
//! store
//!     .create(SessionDraft::new("Ahmad Hassan", slot).with_round(Round::Technical))
//!     .unwrap();
//!
//! let filter = SessionFilter::new().with_status(SessionStatus::Scheduled);
//! let filtered = filter.apply(store.sessions());
//! let days = calendar_view(&filtered);
//! assert_eq!(days.len(), 1);
//! ```

mod filter;
mod search;
mod views;

pub use filter::SessionFilter;
pub use search::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use views::{calendar_view, list_view, CalendarDay};
