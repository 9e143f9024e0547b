//! The fixed whitelist of sortable numeric fields.
//!
//! Only these three keys reorder the roster; the whitelist is the type
//! itself, so an unknown key never reaches the sorter. The header-click
//! collaborator sends the camelCase column tokens.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::MentormatchError;

/// A sortable numeric field of the participant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    StudyMinutes,
    Score,
    ExperienceDays,
}

impl SortKey {
    /// All whitelisted keys.
    pub const ALL: [Self; 3] = [Self::StudyMinutes, Self::Score, Self::ExperienceDays];

    /// The column token this key sorts, as the display collaborator sends it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudyMinutes => "studyMinutes",
            Self::Score => "score",
            Self::ExperienceDays => "experienceDays",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MentormatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "studyMinutes" => Ok(Self::StudyMinutes),
            "score" => Ok(Self::Score),
            "experienceDays" => Ok(Self::ExperienceDays),
            _ => Err(MentormatchError::UnknownSortKey {
                token: s.to_string(),
            }),
        }
    }
}
