//! Operator input validation.
//!
//! Structural checks over scheduling-form input before it reaches the
//! store. Detects:
//! - Missing candidate name
//! - Durations off the scheduling-form menu
//! - Empty interviewer panels
//! - Feedback ratings outside 1–5
//!
//! The store itself assumes valid input (its only failure modes are
//! conflicts and lifecycle violations); every front end should run
//! these checks on the way in so the rules stay uniform.

use crate::models::{Feedback, SessionDraft, DURATION_MENU};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The candidate name is empty.
    MissingCandidate,
    /// The duration is zero or not offered by the scheduling form.
    InvalidDuration,
    /// No interviewer was assigned.
    NoInterviewers,
    /// A feedback rating is outside 1–5.
    RatingOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a session draft against the scheduling-form rules.
///
/// Checks:
/// 1. Candidate name non-empty
/// 2. Duration on the form's menu (which also rules out zero)
/// 3. At least one interviewer assigned
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_draft(draft: &SessionDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.candidate.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingCandidate,
            "Candidate name is required",
        ));
    }

    if !draft.slot.has_menu_duration() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!(
                "Duration {} min is not offered (choose one of {:?})",
                draft.slot.duration_min, DURATION_MENU
            ),
        ));
    }

    if draft.interviewers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoInterviewers,
            "At least one interviewer must be assigned",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates feedback ratings (each must be within 1–5).
pub fn validate_feedback(feedback: &Feedback) -> ValidationResult {
    let ratings = [
        ("technical skills", feedback.technical_skills),
        ("communication", feedback.communication),
        ("teaching ability", feedback.teaching_ability),
        ("culture fit", feedback.culture_fit),
    ];

    let errors: Vec<ValidationError> = ratings
        .iter()
        .filter(|(_, value)| !(1..=5).contains(value))
        .map(|(name, value)| {
            ValidationError::new(
                ValidationErrorKind::RatingOutOfRange,
                format!("Rating '{name}' is {value}, expected 1-5"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn sample_draft() -> SessionDraft {
        let slot = TimeSlot::parse("2024-01-20", "10:00", 60).unwrap();
        SessionDraft::new("Ahmad Hassan", slot)
            .with_position("Math Teacher")
            .with_interviewer("Sara")
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&sample_draft()).is_ok());
    }

    #[test]
    fn test_missing_candidate() {
        let mut draft = sample_draft();
        draft.candidate = "   ".to_string();

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingCandidate));
    }

    #[test]
    fn test_duration_off_menu() {
        let mut draft = sample_draft();
        draft.slot.duration_min = 50;

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDuration));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut draft = sample_draft();
        draft.slot.duration_min = 0;

        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_no_interviewers() {
        let mut draft = sample_draft();
        draft.interviewers.clear();

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoInterviewers));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut draft = sample_draft();
        draft.candidate = String::new();
        draft.interviewers.clear();

        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_feedback_ratings_in_range() {
        assert!(validate_feedback(&Feedback::new(1, 5, 3, 4)).is_ok());
    }

    #[test]
    fn test_feedback_rating_out_of_range() {
        let errors = validate_feedback(&Feedback::new(0, 6, 3, 4)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::RatingOutOfRange));
    }
}
