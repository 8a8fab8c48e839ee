// src/extractors/projects.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::education::capitalize_first;
use crate::extractors::section::{
    is_noise_line, locate_with_chain, AnchorStrategy, KeywordStrategy, LineScanStrategy, Section,
    SectionStrategy, ANCHOR_WINDOW, SECTION_WINDOW,
};
use crate::profile::models::Project;

pub const MAX_PROJECTS: usize = 3;
pub const DESCRIPTION_PLACEHOLDER: &str = "Project description not available";

const MIN_SCAN_LINE_CHARS: usize = 11;
const MAX_TITLE_CHARS: usize = 99;
const MIN_DESCRIPTION_CHARS: usize = 11;
const MAX_DESCRIPTION_CHARS: usize = 299;

pub const PROJECT_KEYWORDS: &[&str] = &[
    "projects",
    "project",
    "portfolio",
    "personal projects",
    "side projects",
    "github",
    "built",
    "developed",
    "created",
];

static PROJECT_CHAIN: &[&dyn SectionStrategy] = &[
    &KeywordStrategy {
        keywords: PROJECT_KEYWORDS,
        window: SECTION_WINDOW,
    },
    &AnchorStrategy {
        anchor: "projects:",
        window: ANCHOR_WINDOW,
    },
    &LineScanStrategy {
        predicate: is_scan_candidate,
    },
];

/// Technologies tagged on a project, in tagging order.
const TECH_KEYWORDS: &[&str] = &[
    "react", "node", "python", "javascript", "java", "sql", "mongodb", "postgresql", "aws",
    "docker", "kubernetes", "tensorflow", "pytorch", "flask", "django", "express", "angular",
    "vue", "typescript", "html", "css", "bootstrap", "tailwind", "php", "ruby", "c++", "c#",
    "swift", "kotlin", "android", "ios",
];

// --- Regex Patterns (Lazy Static) ---
static TITLE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z\s]+$").expect("Failed to compile TITLE_SHAPE_RE")
});

static PROJECT_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(app|website|system|tool|platform|game|bot|dashboard|portfolio|project|web|mobile|desktop|api|service|application)",
    )
    .expect("Failed to compile PROJECT_NOUN_RE")
});

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(built|developed|created|designed|implemented)").expect("Failed to compile ACTION_VERB_RE")
});

static BARE_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(built|developed|created|designed|implemented)$").expect("Failed to compile BARE_VERB_RE")
});

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(projects|portfolio|email|phone|address|linkedin|github|experience|education|skills)")
        .expect("Failed to compile HEADER_RE")
});

/// A short capitalized title naming a project noun or an action verb.
fn is_project_title(line: &str) -> bool {
    line.chars().count() <= MAX_TITLE_CHARS
        && TITLE_SHAPE_RE.is_match(line)
        && (PROJECT_NOUN_RE.is_match(line) || ACTION_VERB_RE.is_match(line))
}

fn is_scan_candidate(line: &str) -> bool {
    line.chars().count() >= MIN_SCAN_LINE_CHARS && is_project_title(line)
}

fn is_description(line: &str) -> bool {
    let len = line.chars().count();
    (MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS).contains(&len)
        && !BARE_VERB_RE.is_match(line)
        && !TITLE_SHAPE_RE.is_match(line)
}

/// Every technology keyword found in the name and description, first
/// letter capitalized. Overlapping keywords (java/javascript) both count.
pub fn extract_technologies(name: &str, description: &str) -> Vec<String> {
    let haystack = format!("{name} {description}").to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|tech| haystack.contains(**tech))
        .map(|tech| capitalize_first(tech))
        .collect()
}

pub fn locate_section(lines: &[String]) -> Option<Section> {
    locate_with_chain(PROJECT_CHAIN, lines)
}

/// Turns located section lines into at most `MAX_PROJECTS` entries.
pub fn parse_entries(section_lines: &[String]) -> Vec<Project> {
    let candidates: Vec<&str> = section_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !is_noise_line(line, &HEADER_RE))
        .collect();

    candidates
        .iter()
        .enumerate()
        .filter(|(_, line)| is_project_title(line))
        .take(MAX_PROJECTS)
        .map(|(i, &name)| {
            let description = candidates
                .get(i + 1)
                .filter(|next| is_description(next))
                .map_or_else(|| DESCRIPTION_PLACEHOLDER.to_string(), |next| next.to_string());
            let technologies = extract_technologies(name, &description);
            Project {
                name: name.to_string(),
                description,
                technologies,
            }
        })
        .collect()
}

pub fn extract_projects(lines: &[String]) -> Vec<Project> {
    let Some(section) = locate_section(lines) else {
        tracing::debug!("No project lines found by any strategy");
        return Vec::new();
    };
    tracing::debug!(
        "Project section via '{}' strategy at line {} ({} lines)",
        section.strategy,
        section.start(),
        section.lines.len()
    );
    let projects = parse_entries(&section.lines);
    tracing::debug!("Extracted {} projects", projects.len());
    projects
}
