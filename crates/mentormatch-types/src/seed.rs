//! The built-in starting roster.
//!
//! The engine boots from this non-empty list; the roster plane passes it
//! through the matcher once at startup, so the derived cross-reference
//! fields here are deliberately left unset.

use rust_decimal::Decimal;

use crate::{MentorProfile, Participant, ParticipantId, Profile, StudentProfile};

#[allow(clippy::too_many_arguments)]
fn student(
    id: u64,
    name: &str,
    email: &str,
    age: u32,
    post_code: &str,
    phone: &str,
    hobbies: &[&str],
    url: &str,
    study_minutes: u32,
    task_code: u32,
    study_langs: &[&str],
    score: Decimal,
) -> Participant {
    Participant {
        id: ParticipantId(id),
        name: name.to_string(),
        email: email.to_string(),
        age,
        post_code: post_code.to_string(),
        phone: phone.to_string(),
        hobbies: hobbies.iter().map(ToString::to_string).collect(),
        url: url.to_string(),
        profile: Profile::Student(StudentProfile {
            study_minutes: Some(study_minutes),
            task_code: Some(task_code),
            study_langs: study_langs.iter().map(ToString::to_string).collect(),
            score: Some(score),
            available_mentors: None,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn mentor(
    id: u64,
    name: &str,
    email: &str,
    age: u32,
    post_code: &str,
    phone: &str,
    hobbies: &[&str],
    url: &str,
    experience_days: u32,
    use_langs: &[&str],
    available_start_code: u32,
    available_end_code: u32,
) -> Participant {
    Participant {
        id: ParticipantId(id),
        name: name.to_string(),
        email: email.to_string(),
        age,
        post_code: post_code.to_string(),
        phone: phone.to_string(),
        hobbies: hobbies.iter().map(ToString::to_string).collect(),
        url: url.to_string(),
        profile: Profile::Mentor(MentorProfile {
            experience_days: Some(experience_days),
            use_langs: use_langs.iter().map(ToString::to_string).collect(),
            available_start_code: Some(available_start_code),
            available_end_code: Some(available_end_code),
            available_students: None,
        }),
    }
}

/// The seed roster: four students and four mentors with overlapping task-code
/// intervals, ids pre-assigned 1..=8.
#[must_use]
pub fn seed_roster() -> Vec<Participant> {
    vec![
        student(
            1,
            "Emma",
            "emma@example.com",
            26,
            "100-0003",
            "070-1111-2222",
            &["movies", "jogging"],
            "https://example.com/emma",
            3000,
            3,
            &["Rails", "JavaScript"],
            Decimal::new(68, 0),
        ),
        student(
            2,
            "Liam",
            "liam@example.com",
            23,
            "150-0042",
            "080-3333-4444",
            &["guitar"],
            "https://example.com/liam",
            1200,
            17,
            &["PHP"],
            Decimal::new(735, 1),
        ),
        student(
            3,
            "Noah",
            "noah@example.com",
            31,
            "220-0011",
            "090-5555-6666",
            &["camping", "chess"],
            "https://example.com/noah",
            6000,
            33,
            &["Python", "Go"],
            Decimal::new(55, 0),
        ),
        student(
            4,
            "Olivia",
            "olivia@example.com",
            20,
            "530-0001",
            "070-7777-8888",
            &["photography"],
            "https://example.com/olivia",
            400,
            98,
            &["Rust"],
            Decimal::new(89, 0),
        ),
        mentor(
            5,
            "Sophia",
            "sophia@example.com",
            34,
            "160-0023",
            "080-9999-0000",
            &["baking"],
            "https://example.com/sophia",
            600,
            &["Rails"],
            0,
            10,
        ),
        mentor(
            6,
            "Mason",
            "mason@example.com",
            41,
            "231-0005",
            "090-1212-3434",
            &["cycling", "cooking"],
            "https://example.com/mason",
            1850,
            &["PHP", "Python"],
            11,
            34,
        ),
        mentor(
            7,
            "Lucas",
            "lucas@example.com",
            29,
            "460-0008",
            "070-5656-7878",
            &["running"],
            "https://example.com/lucas",
            900,
            &["Go"],
            20,
            50,
        ),
        mentor(
            8,
            "Mia",
            "mia@example.com",
            38,
            "810-0002",
            "080-2468-1357",
            &["painting", "travel"],
            "https://example.com/mia",
            3650,
            &["Rust", "TypeScript"],
            60,
            100,
        ),
    ]
}
