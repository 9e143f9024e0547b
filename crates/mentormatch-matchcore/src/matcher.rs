//! Pure roster matcher.
//!
//! The core derivation function: takes the full roster and recomputes every
//! participant's cross-reference field from scratch. This is the **only**
//! function that populates `availableMentors` / `availableStudents` — no
//! state, no incremental patching.
//!
//! ```text
//! match_roster(&[Participant]) -> Vec<Participant>
//! ```
//!
//! ## Range Rule
//!
//! A student and a mentor are compatible when the student's `taskCode` lies
//! **strictly** inside the mentor's open interval:
//! `taskCode > availableStartCode && taskCode < availableEndCode`. Equality
//! at either bound does not match.
//!
//! ## Prerequisites
//!
//! A student without a `taskCode`, or a mentor missing either bound, passes
//! through unchanged — its derived field stays absent. A participant *with*
//! prerequisites always gets a derived value, the empty string when nothing
//! on the other side qualifies.

use mentormatch_types::{Participant, Profile};

/// Recompute the cross-reference fields over the whole roster.
///
/// Pure and total: output order equals input order, the input is not
/// mutated, and every input record appears exactly once in the output.
/// Matched names are joined with `,` in roster order — no de-duplication,
/// no sorting of names.
///
/// O(n²) over the roster size; the roster is bounded by manual data entry,
/// and a full pass keeps the two derivation directions trivially symmetric.
#[must_use]
pub fn match_roster(roster: &[Participant]) -> Vec<Participant> {
    let matched: Vec<Participant> = roster
        .iter()
        .map(|participant| {
            let mut participant = participant.clone();
            match &mut participant.profile {
                Profile::Student(student) => {
                    if let Some(task_code) = student.task_code {
                        student.available_mentors = Some(mentors_covering(roster, task_code));
                    }
                }
                Profile::Mentor(mentor) => {
                    if mentor.has_bounds() {
                        let names = students_within(roster, |code| mentor.covers(code));
                        mentor.available_students = Some(names);
                    }
                }
            }
            participant
        })
        .collect();

    tracing::debug!(
        roster = roster.len(),
        derived = matched
            .iter()
            .filter(|p| match &p.profile {
                Profile::Student(s) => s.available_mentors.is_some(),
                Profile::Mentor(m) => m.available_students.is_some(),
            })
            .count(),
        "Roster rematched"
    );

    matched
}

/// Names of mentors whose interval covers `task_code`, comma-joined in
/// roster order.
fn mentors_covering(roster: &[Participant], task_code: u32) -> String {
    roster
        .iter()
        .filter(|p| p.as_mentor().is_some_and(|m| m.covers(task_code)))
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Names of students whose `task_code` satisfies `covers`, comma-joined in
/// roster order.
fn students_within(roster: &[Participant], covers: impl Fn(u32) -> bool) -> String {
    roster
        .iter()
        .filter(|p| {
            p.as_student()
                .and_then(|s| s.task_code)
                .is_some_and(&covers)
        })
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
