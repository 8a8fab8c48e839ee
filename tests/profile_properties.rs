// tests/profile_properties.rs
use resume_extractor::parse_resume_text;

const RESUME: &str = "\
Alex Kim
alex.kim@mail.com
+1 (415) 555-0199
EDUCATION
University of California Berkeley
B.S. Mathematics, GPA: 3.62, May 2024
TECHNICAL SKILLS
Python, Go, Kubernetes, React, React, react, Machine Learning
WORK EXPERIENCE
Data Analyst at Stripe
2022 - Present
Built fraud dashboards for merchant risk reviews.
Backend Developer for Plaid
2020 - 2022
Maintained payment reconciliation pipelines.
PROJECTS
Budget Tracker App
Django and PostgreSQL app for shared household expenses.
";

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_resume_text(RESUME), parse_resume_text(RESUME));
    assert_eq!(parse_resume_text(""), parse_resume_text(""));
}

#[test]
fn empty_input_yields_defaults() {
    let profile = parse_resume_text("");
    assert_eq!(profile.school, "University");
    assert_eq!(profile.major, "Computer Science");
    assert_eq!(profile.graduation_year, "2026");
    assert_eq!(profile.desired_occupation, "Software Engineer");
    assert_eq!(profile.skills, vec!["Programming", "Problem Solving"]);
    assert!(profile.experiences.is_empty());
    assert!(profile.projects.is_empty());
    assert!(profile.email.is_empty());
    assert!(profile.phone.is_empty());
    assert!(profile.first_name.is_empty());
    assert!(profile.last_name.is_empty());
    assert!(profile.target_companies.is_empty());
    assert!(profile.interests.is_empty());
    assert!(profile.clubs.is_empty());
}

#[test]
fn repeated_skill_appears_once() {
    let profile = parse_resume_text("React React react");
    assert_eq!(profile.skills.iter().filter(|s| *s == "React").count(), 1);

    let profile = parse_resume_text(RESUME);
    assert_eq!(profile.skills.iter().filter(|s| *s == "React").count(), 1);
}

#[test]
fn contact_block() {
    let profile = parse_resume_text("Jane Doe\njane.doe@test.com\n(206) 555-1234");
    assert_eq!(profile.first_name, "Jane");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.email, "jane.doe@test.com");
    let digits: String = profile.phone.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(digits, "2065551234");
}

#[test]
fn gazetteer_resolves_anywhere_in_line_any_case() {
    for line in [
        "University of Washington",
        "B.S., UNIVERSITY OF WASHINGTON, Seattle WA",
        "attended the university of washington (2019-2023)",
    ] {
        let profile = parse_resume_text(&format!("Sam Lee\nEducation\n{line}"));
        assert_eq!(profile.school, "University of Washington", "line: {line}");
    }
}

#[test]
fn full_resume_fields() {
    let profile = parse_resume_text(RESUME);
    assert_eq!(profile.first_name, "Alex");
    assert_eq!(profile.last_name, "Kim");
    assert_eq!(profile.email, "alex.kim@mail.com");
    assert_eq!(profile.school, "University of California Berkeley");
    assert_eq!(profile.major, "Mathematics");
    assert_eq!(profile.gpa, "3.62");
    assert_eq!(profile.graduation_year, "2024");
    assert!(profile.skills.contains(&"Kubernetes".to_string()));
    assert!(profile.skills.contains(&"Machine Learning".to_string()));

    let stripe = profile
        .experiences
        .iter()
        .find(|e| e.company == "Stripe")
        .expect("Stripe entry");
    assert_eq!(stripe.position, "Data Analyst");
    assert_eq!(stripe.duration, "2022 - Present");

    let plaid = profile
        .experiences
        .iter()
        .find(|e| e.company == "Plaid")
        .expect("Plaid entry");
    assert_eq!(plaid.position, "Backend Developer");
    assert_eq!(plaid.duration, "2020 - 2022");
}

#[test]
fn entry_counts_are_capped() {
    let mut text = String::from("Experience\n");
    for i in 0..12 {
        text.push_str(&format!("Software Engineer at Startup{i}\n"));
    }
    text.push_str("Projects\n");
    for i in 0..8 {
        text.push_str(&format!("Mobile App Number {}\n", ["One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight"][i]));
    }
    let profile = parse_resume_text(&text);
    assert!(profile.experiences.len() <= 5);
    assert!(profile.projects.len() <= 3);
    assert_eq!(profile.experiences.len(), 5);
    assert_eq!(profile.projects.len(), 3);
}

#[test]
fn no_experience_anywhere_stays_empty() {
    let profile = parse_resume_text("Pat Quinn\nhello world\nenjoys hiking");
    assert!(profile.experiences.is_empty());
}

#[test]
fn role_line_found_without_section_header() {
    let profile = parse_resume_text("Pat Quinn\nTeaching Assistant at Harvard\nGraded problem sets weekly");
    assert_eq!(profile.experiences.len(), 1);
    assert_eq!(profile.experiences[0].company, "Harvard");
    assert_eq!(profile.experiences[0].position, "Teaching Assistant");
}

#[test]
fn profile_json_has_every_field() {
    let json = serde_json::to_value(parse_resume_text("")).unwrap();
    for key in [
        "firstName", "lastName", "email", "phone", "school", "major", "gpa", "graduationYear",
        "desiredOccupation", "targetCompanies", "interests", "experiences", "skills", "projects", "clubs",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
        assert!(!json[key].is_null(), "null {key}");
    }
}
