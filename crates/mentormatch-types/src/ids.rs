//! Identifiers used throughout MentorMatch.
//!
//! Participant ids are small sequential integers assigned by the roster
//! plane (`max(existing) + 1`), never reused and never reassigned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a roster participant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// The id the roster plane assigns to the participant inserted after
    /// this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
