//! The participant model for the MentorMatch roster engine.
//!
//! A [`Participant`] carries the common identity/contact fields plus a
//! role-conditioned [`Profile`]. Role is a closed sum type — an unrecognized
//! role cannot be constructed, so it can never reach the matcher.
//!
//! The derived fields (`available_mentors` / `available_students`) are owned
//! by the match plane: `None` means "not applicable" (matching prerequisites
//! absent), `Some("")` means "matched against the roster, nothing qualified".

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ParticipantId, SortKey};

/// Which side of the matching relation a participant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Mentor => write!(f, "mentor"),
        }
    }
}

/// Student-only fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// Minutes of study per week. Sortable; missing compares as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_minutes: Option<u32>,
    /// Code of the task the student needs help with. Matching prerequisite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_code: Option<u32>,
    /// Languages the student is studying.
    #[serde(default)]
    pub study_langs: Vec<String>,
    /// Assessment score. Sortable; missing compares as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,
    /// Derived by the match plane: comma-joined names of compatible mentors,
    /// in roster order. Never user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_mentors: Option<String>,
}

/// Mentor-only fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    /// Days of professional experience. Sortable; missing compares as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_days: Option<u32>,
    /// Languages the mentor works in.
    #[serde(default)]
    pub use_langs: Vec<String>,
    /// Lower bound (exclusive) of the task-code interval this mentor covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_start_code: Option<u32>,
    /// Upper bound (exclusive) of the task-code interval this mentor covers.
    /// `start < end` is expected but not enforced; an inverted interval
    /// simply covers nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_end_code: Option<u32>,
    /// Derived by the match plane: comma-joined names of compatible students,
    /// in roster order. Never user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_students: Option<String>,
}

impl MentorProfile {
    /// Whether both interval bounds are present (matching prerequisite).
    #[must_use]
    pub fn has_bounds(&self) -> bool {
        self.available_start_code.is_some() && self.available_end_code.is_some()
    }

    /// Whether this mentor covers `task_code`.
    ///
    /// The interval is **open**: a task code equal to either bound does not
    /// match. Returns `false` when either bound is absent.
    #[must_use]
    pub fn covers(&self, task_code: u32) -> bool {
        match (self.available_start_code, self.available_end_code) {
            (Some(start), Some(end)) => task_code > start && task_code < end,
            _ => false,
        }
    }
}

/// Role-conditioned participant fields.
///
/// Internally tagged on `role` and flattened into [`Participant`], so the
/// serialized record is the flat object the display collaborator consumes:
/// `{"role": "student", "taskCode": 15, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Student(StudentProfile),
    Mentor(MentorProfile),
}

impl Profile {
    /// The role this profile belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Mentor(_) => Role::Mentor,
        }
    }
}

/// A roster participant — the sole entity of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique, immutable once assigned by the roster plane.
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub post_code: String,
    pub phone: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    pub url: String,
    /// Role-conditioned fields, flattened into the record on the wire.
    #[serde(flatten)]
    pub profile: Profile,
}

impl Participant {
    /// The participant's role, derived from the profile variant.
    #[must_use]
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role() == Role::Student
    }

    #[must_use]
    pub fn is_mentor(&self) -> bool {
        self.role() == Role::Mentor
    }

    /// The student profile, if this participant is a student.
    #[must_use]
    pub fn as_student(&self) -> Option<&StudentProfile> {
        match &self.profile {
            Profile::Student(s) => Some(s),
            Profile::Mentor(_) => None,
        }
    }

    /// The mentor profile, if this participant is a mentor.
    #[must_use]
    pub fn as_mentor(&self) -> Option<&MentorProfile> {
        match &self.profile {
            Profile::Mentor(m) => Some(m),
            Profile::Student(_) => None,
        }
    }

    /// The participant's value under a sort key.
    ///
    /// Missing values compare as zero, and so does a key that does not apply
    /// to this participant's role (sorting mixes both roles).
    #[must_use]
    pub fn sort_value(&self, key: SortKey) -> Decimal {
        match (&self.profile, key) {
            (Profile::Student(s), SortKey::StudyMinutes) => {
                s.study_minutes.map_or(Decimal::ZERO, Decimal::from)
            }
            (Profile::Student(s), SortKey::Score) => s.score.unwrap_or(Decimal::ZERO),
            (Profile::Mentor(m), SortKey::ExperienceDays) => {
                m.experience_days.map_or(Decimal::ZERO, Decimal::from)
            }
            _ => Decimal::ZERO,
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Participant {
    pub fn dummy_student(id: u64, name: &str, task_code: Option<u32>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: 20,
            post_code: "100-0001".to_string(),
            phone: "000-0000-0000".to_string(),
            hobbies: vec!["reading".to_string()],
            url: "https://example.com".to_string(),
            profile: Profile::Student(StudentProfile {
                study_minutes: Some(1000),
                task_code,
                study_langs: vec!["Rust".to_string()],
                score: Some(Decimal::new(50, 0)),
                available_mentors: None,
            }),
        }
    }

    pub fn dummy_mentor(id: u64, name: &str, start: Option<u32>, end: Option<u32>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: 35,
            post_code: "100-0002".to_string(),
            phone: "111-1111-1111".to_string(),
            hobbies: vec!["climbing".to_string()],
            url: "https://example.com".to_string(),
            profile: Profile::Mentor(MentorProfile {
                experience_days: Some(2000),
                use_langs: vec!["Rust".to_string()],
                available_start_code: start,
                available_end_code: end,
                available_students: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display() {
        assert_eq!(format!("{}", Role::Student), "student");
        assert_eq!(format!("{}", Role::Mentor), "mentor");
    }

    #[test]
    fn role_from_profile() {
        let student = Participant::dummy_student(1, "Ann", Some(10));
        let mentor = Participant::dummy_mentor(2, "Bob", Some(5), Some(15));
        assert_eq!(student.role(), Role::Student);
        assert_eq!(mentor.role(), Role::Mentor);
        assert!(student.is_student() && !student.is_mentor());
        assert!(mentor.is_mentor() && !mentor.is_student());
    }

    #[test]
    fn covers_is_strict_open_interval() {
        let mentor = Participant::dummy_mentor(1, "Bob", Some(10), Some(20));
        let profile = mentor.as_mentor().unwrap();
        assert!(!profile.covers(10), "equal to start must not match");
        assert!(profile.covers(11));
        assert!(profile.covers(19));
        assert!(!profile.covers(20), "equal to end must not match");
        assert!(!profile.covers(25));
    }

    #[test]
    fn covers_requires_both_bounds() {
        let mentor = Participant::dummy_mentor(1, "Bob", Some(10), None);
        assert!(!mentor.as_mentor().unwrap().covers(15));
        assert!(!mentor.as_mentor().unwrap().has_bounds());
    }

    #[test]
    fn inverted_interval_covers_nothing() {
        let mentor = Participant::dummy_mentor(1, "Bob", Some(20), Some(10));
        let profile = mentor.as_mentor().unwrap();
        assert!(profile.has_bounds());
        assert!(!profile.covers(15));
    }

    #[test]
    fn sort_value_missing_and_foreign_keys_are_zero() {
        let mut student = Participant::dummy_student(1, "Ann", Some(10));
        if let Profile::Student(s) = &mut student.profile {
            s.study_minutes = None;
        }
        assert_eq!(student.sort_value(SortKey::StudyMinutes), Decimal::ZERO);
        // A mentor-only key on a student is zero as well.
        assert_eq!(student.sort_value(SortKey::ExperienceDays), Decimal::ZERO);

        let mentor = Participant::dummy_mentor(2, "Bob", Some(5), Some(15));
        assert_eq!(
            mentor.sort_value(SortKey::ExperienceDays),
            Decimal::from(2000u32)
        );
        assert_eq!(mentor.sort_value(SortKey::Score), Decimal::ZERO);
    }

    #[test]
    fn serializes_flat_with_camel_case_keys() {
        let student = Participant::dummy_student(1, "Ann", Some(15));
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["taskCode"], 15);
        assert_eq!(json["postCode"], "100-0001");
        // Derived field absent until the match plane populates it.
        assert!(json.get("availableMentors").is_none());
    }

    #[test]
    fn derived_empty_string_survives_roundtrip() {
        let mut student = Participant::dummy_student(1, "Ann", Some(15));
        if let Profile::Student(s) = &mut student.profile {
            s.available_mentors = Some(String::new());
        }
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains("\"availableMentors\":\"\""));
        let back: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn deserializes_mentor_record() {
        let json = r#"{
            "id": 5,
            "name": "Mentor1",
            "email": "m1@example.com",
            "age": 40,
            "postCode": "150-0000",
            "phone": "222-2222-2222",
            "hobbies": ["golf"],
            "url": "https://example.com/m1",
            "role": "mentor",
            "experienceDays": 1500,
            "useLangs": ["Rust", "TypeScript"],
            "availableStartCode": 10,
            "availableEndCode": 20
        }"#;
        let mentor: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(mentor.role(), Role::Mentor);
        let profile = mentor.as_mentor().unwrap();
        assert_eq!(profile.available_start_code, Some(10));
        assert_eq!(profile.available_end_code, Some(20));
        assert!(profile.available_students.is_none());
    }
}
