// src/profile/mod.rs
pub mod models;

pub use models::{Experience, ParsedProfile, Project};

use crate::extractors::{contact, education, experience, normalize_lines, projects, skills};

pub const DEFAULT_SCHOOL: &str = "University";
pub const DEFAULT_MAJOR: &str = "Computer Science";
pub const DEFAULT_GRADUATION_YEAR: &str = "2026";
pub const DEFAULT_OCCUPATION: &str = "Software Engineer";
pub const DEFAULT_SKILLS: [&str; 2] = ["Programming", "Problem Solving"];

/// Which education fields `apply_defaults` had to fill in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Defaulted {
    pub school: bool,
    pub major: bool,
    pub graduation_year: bool,
}

/// Parses free-form résumé text into a `ParsedProfile`.
///
/// Extraction is best-effort and never fails: whatever cannot be found falls
/// back to a fixed default. The same input always gives the same profile.
pub fn parse_resume_text(text: &str) -> ParsedProfile {
    parse_resume_with_defaults(text).0
}

/// Like `parse_resume_text`, also reporting which education fields were defaulted.
pub fn parse_resume_with_defaults(text: &str) -> (ParsedProfile, Defaulted) {
    let lines = normalize_lines(text);
    tracing::debug!("Parsing résumé text: {} bytes, {} lines", text.len(), lines.len());

    let contact = contact::extract_contact(&lines, text);
    let education = education::extract_education(&lines);

    let profile = ParsedProfile {
        first_name: contact.first_name,
        last_name: contact.last_name,
        email: contact.email,
        phone: contact.phone,
        school: education.school,
        major: education.major,
        gpa: education.gpa,
        graduation_year: education.graduation_year,
        desired_occupation: String::new(),
        target_companies: Vec::new(),
        interests: Vec::new(),
        experiences: experience::extract_experiences(&lines),
        skills: skills::extract_skills(&lines, text),
        projects: projects::extract_projects(&lines),
        clubs: Vec::new(),
    };

    let (profile, defaulted) = apply_defaults(profile);
    tracing::info!(
        "Parsed profile: {} skills, {} experiences, {} projects",
        profile.skills.len(),
        profile.experiences.len(),
        profile.projects.len()
    );
    (profile, defaulted)
}

/// Replaces fields that extraction left empty with their defaults.
pub fn apply_defaults(mut profile: ParsedProfile) -> (ParsedProfile, Defaulted) {
    let defaulted = Defaulted {
        school: fill_if_empty(&mut profile.school, DEFAULT_SCHOOL),
        major: fill_if_empty(&mut profile.major, DEFAULT_MAJOR),
        graduation_year: fill_if_empty(&mut profile.graduation_year, DEFAULT_GRADUATION_YEAR),
    };
    fill_if_empty(&mut profile.desired_occupation, DEFAULT_OCCUPATION);

    if profile.skills.is_empty() {
        tracing::debug!("No skills found, using minimal defaults");
        profile.skills = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    (profile, defaulted)
}

/// Returns true when the default was used.
fn fill_if_empty(field: &mut String, default: &str) -> bool {
    if !field.is_empty() {
        return false;
    }
    *field = default.to_string();
    true
}
