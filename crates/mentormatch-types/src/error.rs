//! Error types for the MentorMatch roster engine.
//!
//! All errors use the `MM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: display vocabulary (tabs, sort keys)
//! - 2xx: intake validation
//!
//! The engine itself never fails on valid-shaped input — missing matching
//! prerequisites and empty match sets are ordinary outcomes, and a
//! non-whitelisted sort request at the roster boundary is a silent no-op.
//! These errors surface only when parsing collaborator tokens or running the
//! intake validation step.

use thiserror::Error;

use crate::Role;

/// Central error enum for all MentorMatch operations.
#[derive(Debug, Error)]
pub enum MentormatchError {
    /// The tab token is outside the display contract
    /// (`all`, `student`/`students`, `mentor`/`mentors`).
    #[error("MM_ERR_100: Unknown tab token: {token:?}")]
    UnknownTab { token: String },

    /// The sort key token is outside the whitelist
    /// (`studyMinutes`, `score`, `experienceDays`).
    #[error("MM_ERR_101: Unknown sort key: {token:?}")]
    UnknownSortKey { token: String },

    /// Required fields for the participant's role are empty or absent.
    #[error("MM_ERR_200: Missing required fields for {role}: {}", .fields.join(", "))]
    MissingFields {
        role: Role,
        fields: Vec<&'static str>,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, MentormatchError>;
