//! Display-filter tabs.
//!
//! The tab tokens are a contract with the display collaborator: `all`,
//! `student`/`students`, `mentor`/`mentors`. Beyond selecting one of the
//! three filter behaviors the strings carry no meaning.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{MentormatchError, Role};

/// Which subset of the roster a display view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    All,
    Students,
    Mentors,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Students, Self::Mentors];

    /// The role this tab narrows to, if any.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::All => None,
            Self::Students => Some(Role::Student),
            Self::Mentors => Some(Role::Mentor),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Students => write!(f, "students"),
            Self::Mentors => write!(f, "mentors"),
        }
    }
}

impl FromStr for Tab {
    type Err = MentormatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "student" | "students" => Ok(Self::Students),
            "mentor" | "mentors" => Ok(Self::Mentors),
            _ => Err(MentormatchError::UnknownTab {
                token: s.to_string(),
            }),
        }
    }
}
