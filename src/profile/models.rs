// src/profile/models.rs
use serde::{Deserialize, Serialize};

/// One work-history entry. Unresolved parts hold placeholder text, never blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Structured profile extracted from résumé text.
///
/// Every field is always present. `target_companies`, `interests` and `clubs`
/// are filled in by whoever edits the profile afterwards and start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub major: String,
    pub gpa: String,
    pub graduation_year: String,
    pub desired_occupation: String,
    pub target_companies: Vec<String>,
    pub interests: Vec<String>,
    pub experiences: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub clubs: Vec<String>,
}
