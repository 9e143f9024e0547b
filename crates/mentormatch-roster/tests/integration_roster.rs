//! Integration test: full roster lifecycle.
//!
//! Boots the engine from seed data and walks the collaborator-facing flow:
//! add → rematch, explicit sort, tab views. Mirrors the behavior the
//! display and intake collaborators rely on.

use mentormatch_roster::{Roster, TabView};
use mentormatch_types::{Participant, ParticipantId, SortKey, Tab, seed::seed_roster};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn available_mentors(p: &Participant) -> Option<&str> {
    p.as_student()?.available_mentors.as_deref()
}

fn available_students(p: &Participant) -> Option<&str> {
    p.as_mentor()?.available_students.as_deref()
}

fn by_name<'a>(roster: &'a Roster, name: &str) -> &'a Participant {
    roster
        .participants()
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("{name} not in roster"))
}

#[test]
fn end_to_end_add_and_rematch() {
    init_tracing();

    // Minimal roster: one mentor covering (10, 20), one student at 15.
    let mut roster = Roster::new(vec![
        Participant::dummy_mentor(1, "Mentor1", Some(10), Some(20)),
        Participant::dummy_student(2, "Student1", Some(15)),
    ]);
    assert_eq!(available_mentors(by_name(&roster, "Student1")), Some("Mentor1"));
    assert_eq!(available_students(by_name(&roster, "Mentor1")), Some("Student1"));

    // Student2's task code 25 is covered by nobody.
    let id = roster.add(Participant::dummy_student(0, "Student2", Some(25)));
    assert_eq!(id, ParticipantId(3));
    assert_eq!(
        available_mentors(by_name(&roster, "Student2")),
        Some(""),
        "no mentor covers 25 — empty string, not absent"
    );
    // Mentor1 was re-derived and is unchanged: Student2 does not qualify.
    assert_eq!(available_students(by_name(&roster, "Mentor1")), Some("Student1"));
}

#[test]
fn seed_roster_boots_with_expected_matches() {
    let roster = Roster::new(seed_roster());
    assert_eq!(roster.len(), 8);

    assert_eq!(available_mentors(by_name(&roster, "Emma")), Some("Sophia"));
    assert_eq!(available_mentors(by_name(&roster, "Liam")), Some("Mason"));
    // Noah's task code 33 sits inside both Mason (11,34) and Lucas (20,50),
    // joined in roster order.
    assert_eq!(available_mentors(by_name(&roster, "Noah")), Some("Mason,Lucas"));
    assert_eq!(available_mentors(by_name(&roster, "Olivia")), Some("Mia"));

    assert_eq!(available_students(by_name(&roster, "Mason")), Some("Liam,Noah"));
    assert_eq!(available_students(by_name(&roster, "Sophia")), Some("Emma"));
}

#[test]
fn sort_persists_until_the_next_explicit_sort() {
    let mut roster = Roster::new(seed_roster());
    roster.set_sort(SortKey::StudyMinutes, true);

    let minutes: Vec<u32> = roster
        .participants()
        .iter()
        .filter_map(|p| p.as_student().and_then(|s| s.study_minutes))
        .collect();
    let mut expected = minutes.clone();
    expected.sort_unstable();
    assert_eq!(minutes, expected, "students ordered by studyMinutes");

    // An add appends at the end; the sort is not re-applied automatically.
    roster.add(Participant::dummy_student(0, "Latecomer", Some(5)));
    assert_eq!(roster.participants().last().unwrap().name, "Latecomer");

    // Only the next explicit sort folds the newcomer into position.
    roster.set_sort(SortKey::StudyMinutes, true);
    assert_ne!(roster.participants().last().unwrap().name, "Latecomer");
}

#[test]
fn sort_order_survives_filtering() {
    let mut roster = Roster::new(seed_roster());
    roster.set_sort(SortKey::ExperienceDays, false);

    let mentors = roster.view(Tab::Mentors);
    let days: Vec<u32> = mentors
        .iter()
        .filter_map(|p| p.as_mentor().and_then(|m| m.experience_days))
        .collect();
    let mut expected = days.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(days, expected, "mentor view reflects the descending sort");
}

#[test]
fn non_whitelisted_sort_is_a_silent_no_op() {
    let mut roster = Roster::new(seed_roster());
    let before = roster.participants().to_vec();

    assert!(!roster.set_sort_token("name", true));
    assert!(!roster.set_sort_token("availableMentors", false));
    assert_eq!(roster.participants(), &before[..]);

    // The strict typed path rejects the same token loudly.
    let err = "name".parse::<SortKey>().unwrap_err();
    assert!(format!("{err}").starts_with("MM_ERR_101"));
}

#[test]
fn views_partition_and_leave_the_roster_untouched() {
    let roster = Roster::new(seed_roster());
    let before = roster.participants().to_vec();

    let all = roster.view(Tab::All);
    let students = roster.view(Tab::Students);
    let mentors = roster.view(Tab::Mentors);

    assert_eq!(students.len() + mentors.len(), all.len());
    assert!(students.iter().all(Participant::is_student));
    assert!(mentors.iter().all(Participant::is_mentor));
    assert_eq!(roster.participants(), &before[..]);
}

#[test]
fn tab_view_payload_matches_the_display_contract() {
    let roster = Roster::new(seed_roster());
    let view = TabView::build(&roster, Tab::Mentors);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["tab"], "mentors");
    let columns: Vec<&str> = json["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(columns.last(), Some(&"availableStudents"));

    for row in json["rows"].as_array().unwrap() {
        assert_eq!(row["role"], "mentor");
        assert!(
            row.get("availableStudents").is_some(),
            "seed mentors all have bounds, so the derived column is populated"
        );
    }
}

#[test]
fn tab_tokens_parse_into_views() {
    let roster = Roster::new(seed_roster());
    for token in ["all", "student", "students", "mentor", "mentors"] {
        let tab: Tab = token.parse().unwrap();
        let _ = roster.view(tab);
    }
    assert!("teachers".parse::<Tab>().is_err());
}
