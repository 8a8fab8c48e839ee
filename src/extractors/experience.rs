// src/extractors/experience.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::section::{
    is_noise_line, locate_with_chain, AnchorStrategy, KeywordStrategy, LineScanStrategy, Section,
    SectionStrategy, ANCHOR_WINDOW, SECTION_WINDOW,
};
use crate::profile::models::Experience;

pub const MAX_EXPERIENCES: usize = 5;
pub const COMPANY_PLACEHOLDER: &str = "Company Name";
pub const DURATION_PLACEHOLDER: &str = "Duration not specified";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available";

const MIN_SCAN_LINE_CHARS: usize = 11;
const MIN_DESCRIPTION_CHARS: usize = 11;
const MAX_DESCRIPTION_CHARS: usize = 299;
const MAX_POSITION_CHARS: usize = 99;

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "experiences",
    "employment",
    "work history",
    "professional experience",
    "work",
    "career",
];

static EXPERIENCE_CHAIN: &[&dyn SectionStrategy] = &[
    &KeywordStrategy {
        keywords: EXPERIENCE_KEYWORDS,
        window: SECTION_WINDOW,
    },
    &AnchorStrategy {
        anchor: "experiences:",
        window: ANCHOR_WINDOW,
    },
    &LineScanStrategy {
        predicate: is_scan_candidate,
    },
];

// --- Regex Patterns (Lazy Static) ---
static ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(engineer|developer|analyst|manager|intern|assistant|specialist|coordinator|consultant|director|lead|senior|junior|programmer|coder|designer|researcher|student|volunteer)",
    )
    .expect("Failed to compile ROLE_RE")
});

// Roles plus technology and business-domain words
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(engineer|developer|analyst|manager|intern|assistant|specialist|coordinator|consultant|director|lead|senior|junior|programmer|coder|designer|researcher|student|volunteer|software|data|web|frontend|backend|full|stack|mobile|ios|android|python|java|javascript|react|angular|vue|node|sql|database|cloud|aws|azure|devops|qa|test|quality|product|marketing|sales|business|finance|hr|human|resources)",
    )
    .expect("Failed to compile ENTRY_RE")
});

static AT_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:at|for)\s+[A-Z]").expect("Failed to compile AT_COMPANY_RE")
});

static COMPANY_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][a-z]+\s+[A-Z][a-z]+.*(?:Inc|LLC|Corp|Company|Technologies|Systems|Solutions)")
        .expect("Failed to compile COMPANY_SUFFIX_RE")
});

static INLINE_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:at|for)\s+([A-Z][a-zA-Z\s&.,]+)").expect("Failed to compile INLINE_COMPANY_RE")
});

static STANDALONE_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z\s&.,]+$").expect("Failed to compile STANDALONE_COMPANY_RE")
});

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{4})\s*[-–]\s*([0-9]{4}|present|current)").expect("Failed to compile DURATION_RE")
});

static DESCRIPTION_ROLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(engineer|developer|analyst|manager|intern)").expect("Failed to compile DESCRIPTION_ROLE_RE")
});

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(experience|employment|work|email|phone|address|linkedin|github|projects|education|skills)")
        .expect("Failed to compile HEADER_RE")
});

/// Whole-document fallback: any reasonably long line naming a role or an employer.
fn is_scan_candidate(line: &str) -> bool {
    line.chars().count() >= MIN_SCAN_LINE_CHARS && (ROLE_RE.is_match(line) || AT_COMPANY_RE.is_match(line))
}

fn looks_like_entry(line: &str) -> bool {
    ENTRY_RE.is_match(line) || AT_COMPANY_RE.is_match(line) || COMPANY_SUFFIX_RE.is_match(line)
}

pub fn locate_section(lines: &[String]) -> Option<Section> {
    locate_with_chain(EXPERIENCE_CHAIN, lines)
}

/// Splits an entry line into (position, company).
fn split_position_company(line: &str, next: Option<&str>) -> (String, String) {
    for separator in [" at ", " for "] {
        if line.contains(separator) {
            let mut parts = line.split(separator);
            let position = parts.next().unwrap_or_default().trim().to_string();
            let company = parts.next().unwrap_or_default().trim().to_string();
            return (position, company);
        }
    }

    if let Some(next) = next.filter(|n| STANDALONE_COMPANY_RE.is_match(n)) {
        return (line.to_string(), next.trim().to_string());
    }

    match INLINE_COMPANY_RE.captures(line) {
        Some(caps) => {
            let company = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default().to_string();
            let position = INLINE_COMPANY_RE.replace(line, "").trim().to_string();
            (position, company)
        }
        None => (line.to_string(), COMPANY_PLACEHOLDER.to_string()),
    }
}

fn find_duration(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find_map(|line| DURATION_RE.find(line))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DURATION_PLACEHOLDER.to_string())
}

fn is_description(line: &str) -> bool {
    let len = line.chars().count();
    (MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS).contains(&len) && !DESCRIPTION_ROLE_RE.is_match(line)
}

fn find_description(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|line| is_description(line))
        .map(|line| line.to_string())
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string())
}

/// Turns located section lines into at most `MAX_EXPERIENCES` entries.
pub fn parse_entries(section_lines: &[String]) -> Vec<Experience> {
    let candidates: Vec<&str> = section_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !is_noise_line(line, &HEADER_RE))
        .collect();

    let mut experiences = Vec::new();
    for (i, &line) in candidates.iter().enumerate() {
        if experiences.len() == MAX_EXPERIENCES {
            break;
        }
        if !looks_like_entry(line) {
            continue;
        }

        let next = candidates.get(i + 1).copied();
        let after_next = candidates.get(i + 2).copied();
        let (position, company) = split_position_company(line, next);

        if position.chars().count() > MAX_POSITION_CHARS {
            tracing::trace!("Rejecting experience line, position too long: '{}'", line);
            continue;
        }
        // An empty position can only come from the inline "at Company" strip.
        if position.is_empty() {
            continue;
        }

        let experience = Experience {
            company,
            position,
            duration: find_duration(&[Some(line), next, after_next]),
            description: find_description(&[next, after_next]),
        };
        tracing::trace!("Accepted experience: {:?}", experience);
        experiences.push(experience);
    }
    experiences
}

pub fn extract_experiences(lines: &[String]) -> Vec<Experience> {
    let Some(section) = locate_section(lines) else {
        tracing::debug!("No experience lines found by any strategy");
        return Vec::new();
    };
    tracing::debug!(
        "Experience section via '{}' strategy at line {} ({} lines)",
        section.strategy,
        section.start(),
        section.lines.len()
    );
    let experiences = parse_entries(&section.lines);
    tracing::debug!("Extracted {} experiences", experiences.len());
    experiences
}
