//! Intake validation for new participant records.
//!
//! The intake collaborator runs this check before handing a record to the
//! roster plane; the roster itself never re-validates. A required field is
//! missing when its string is empty, its option is absent, or its list is
//! empty. Numeric zero counts as present.

use crate::{MentormatchError, Participant, Profile, Result};

/// The camelCase keys of the required fields that are empty or absent,
/// in contract order: common fields first, then the role-specific group.
#[must_use]
pub fn missing_fields(participant: &Participant) -> Vec<&'static str> {
    let mut missing = Vec::new();

    let mut require_str = |key, value: &str| {
        if value.is_empty() {
            missing.push(key);
        }
    };
    require_str("name", &participant.name);
    require_str("email", &participant.email);
    require_str("postCode", &participant.post_code);
    require_str("phone", &participant.phone);
    require_str("url", &participant.url);

    match &participant.profile {
        Profile::Student(s) => {
            if s.study_minutes.is_none() {
                missing.push("studyMinutes");
            }
            if s.task_code.is_none() {
                missing.push("taskCode");
            }
            if s.study_langs.is_empty() {
                missing.push("studyLangs");
            }
            if s.score.is_none() {
                missing.push("score");
            }
        }
        Profile::Mentor(m) => {
            if m.experience_days.is_none() {
                missing.push("experienceDays");
            }
            if m.use_langs.is_empty() {
                missing.push("useLangs");
            }
            if m.available_start_code.is_none() {
                missing.push("availableStartCode");
            }
            if m.available_end_code.is_none() {
                missing.push("availableEndCode");
            }
        }
    }

    missing
}

/// Validate a record for intake.
///
/// # Errors
/// Returns [`MentormatchError::MissingFields`] listing every empty required
/// field for the record's role.
pub fn validate(participant: &Participant) -> Result<()> {
    let fields = missing_fields(participant);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(MentormatchError::MissingFields {
            role: participant.role(),
            fields,
        })
    }
}
