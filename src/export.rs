//! CSV export of a filtered session view.
//!
//! Flattens sessions into comma-delimited text for download into
//! spreadsheet tools: a fixed header row, then one row per session in
//! the order given. Interviewer sets are joined with `"; "` so the
//! field never collides with the record delimiter, and every field
//! passes through standard CSV quoting (fields containing the
//! delimiter, a quote, or a newline are wrapped in quotes with embedded
//! quotes doubled).

use chrono::NaiveDate;

use crate::models::{Session, TIME_FORMAT};

/// Export column order. The header row is exactly this list.
const COLUMNS: [&str; 11] = [
    "candidate",
    "position",
    "date",
    "time",
    "duration",
    "type",
    "round",
    "status",
    "interviewers",
    "location",
    "rating",
];

/// Separator for the interviewer set inside its single CSV field.
const INTERVIEWER_SEPARATOR: &str = "; ";

/// Serializes sessions to CSV, header row first.
///
/// Rows keep the input order — export what the operator currently
/// sees, so the caller passes the filtered view.
pub fn to_csv(sessions: &[&Session]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for session in sessions {
        let rating = session
            .feedback
            .as_ref()
            .map(|f| format!("{:.2}", f.overall_score()))
            .unwrap_or_default();
        let interviewers = session
            .interviewers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(INTERVIEWER_SEPARATOR);

        let fields = [
            session.candidate.clone(),
            session.position.clone(),
            session.slot.date.to_string(),
            session.slot.time.format(TIME_FORMAT).to_string(),
            format!("{} min", session.slot.duration_min),
            session.kind.as_str().to_string(),
            session.round.as_str().to_string(),
            session.status.as_str().to_string(),
            interviewers,
            session.location.clone(),
            rating,
        ];

        let row: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Download filename for an export taken on the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("interviews_{date}.csv")
}

/// Quotes a field when it contains the delimiter, a quote, or a
/// newline; embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
