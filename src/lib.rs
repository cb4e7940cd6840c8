//! Interview scheduling and conflict resolution engine.
//!
//! In-memory scheduling core for recruitment workflows: session
//! lifecycle (create, confirm, reschedule, cancel, complete), overlap
//! conflict detection, filtered/debounced projections, calendar
//! grouping, and CSV export.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `TimeSlot`, `Round`,
//!   `SessionStatus`, `Feedback`, `SessionDraft`, `SlotChange`
//! - **`conflict`**: Overlap detection between scheduled sessions
//! - **`store`**: The mutation engine — every state change, conflict-guarded
//! - **`projection`**: Read-side filtering, search debouncing, list/calendar views
//! - **`export`**: CSV flattening of a filtered view
//! - **`validation`**: Scheduling-form input checks
//!
//! # Architecture
//!
//! Data flows one direction: mutations go through `store::SessionStore`
//! (guarded by `conflict::find_conflict`); everything else is a pure
//! read-side projection over the store's current state. The engine is
//! single-writer and synchronous — persistence and notification are the
//! embedding application's collaborators, handed session snapshots and
//! mutation results.

pub mod conflict;
pub mod export;
pub mod models;
pub mod projection;
pub mod store;
pub mod validation;
