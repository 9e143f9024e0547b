//! Display column contracts.
//!
//! The display collaborator renders table headers from these fixed,
//! role-dependent key lists: common columns always, student columns on the
//! `students`/`all` tabs, mentor columns on the `mentors`/`all` tabs. The
//! derived cross-reference column sits last in its role group.

use crate::Tab;

/// Columns rendered for every participant.
pub const COMMON_COLUMNS: [&str; 8] = [
    "name", "role", "email", "age", "postCode", "phone", "hobbies", "url",
];

/// Columns rendered for students, `availableMentors` last.
pub const STUDENT_COLUMNS: [&str; 5] = [
    "studyMinutes",
    "taskCode",
    "studyLangs",
    "score",
    "availableMentors",
];

/// Columns rendered for mentors, `availableStudents` last.
pub const MENTOR_COLUMNS: [&str; 5] = [
    "experienceDays",
    "useLangs",
    "availableStartCode",
    "availableEndCode",
    "availableStudents",
];

/// The full header list for a tab, in render order.
#[must_use]
pub fn columns_for_tab(tab: Tab) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = COMMON_COLUMNS.to_vec();
    match tab {
        Tab::All => {
            columns.extend(STUDENT_COLUMNS);
            columns.extend(MENTOR_COLUMNS);
        }
        Tab::Students => columns.extend(STUDENT_COLUMNS),
        Tab::Mentors => columns.extend(MENTOR_COLUMNS),
    }
    columns
}
