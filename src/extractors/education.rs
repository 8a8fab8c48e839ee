// src/extractors/education.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::section::{locate_with_chain, KeywordStrategy, Section, SectionStrategy, SECTION_WINDOW};

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
    "degree",
    "gpa",
    "graduation",
    "education",
];

static EDUCATION_CHAIN: &[&dyn SectionStrategy] = &[&KeywordStrategy {
    keywords: EDUCATION_KEYWORDS,
    window: SECTION_WINDOW,
}];

const MAJOR_KEYWORDS: &[&str] = &[
    "computer science",
    "engineering",
    "business",
    "mathematics",
    "physics",
    "chemistry",
];

static GPA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)gpa[:\s]*([0-9]+\.[0-9]+)").expect("Failed to compile GPA_RE")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"20[0-9]{2}").expect("Failed to compile YEAR_RE"));

// --- Gazetteer ---
/// Canonical institution names, matched by full-name containment.
const KNOWN_SCHOOLS: &[&str] = &[
    // Major universities
    "Harvard University", "Stanford University", "MIT", "California Institute of Technology",
    "Princeton University", "Yale University", "University of Chicago", "Columbia University",
    "University of Pennsylvania", "Duke University", "Northwestern University",
    "Johns Hopkins University", "Cornell University", "Brown University", "Rice University",
    "Vanderbilt University", "Washington University in St. Louis", "Emory University",
    "Georgetown University", "University of Notre Dame", "Carnegie Mellon University",
    "University of Virginia", "Wake Forest University",
    // State universities
    "University of California Berkeley", "University of California Los Angeles",
    "University of Michigan", "University of North Carolina Chapel Hill",
    "Georgia Institute of Technology", "University of Wisconsin Madison",
    "University of Illinois Urbana Champaign", "Pennsylvania State University",
    "Ohio State University", "University of Texas Austin", "University of Florida",
    "University of Washington", "University of Minnesota", "University of Maryland College Park",
    "Purdue University", "University of Colorado Boulder", "Arizona State University",
    "University of Arizona", "University of Oregon", "University of Utah",
    // Other notable universities
    "New York University", "Boston University", "Northeastern University",
    "University of Southern California", "Tufts University", "Brandeis University",
    "Case Western Reserve University", "Tulane University", "University of Rochester",
    "Rensselaer Polytechnic Institute", "Stevens Institute of Technology",
    "Worcester Polytechnic Institute", "Lehigh University", "Villanova University",
    "Santa Clara University",
    // Generic institution kinds
    "Community College", "State University", "City College", "Technical College",
    "Liberal Arts College",
    // International
    "University of Toronto", "McGill University", "University of British Columbia",
    "University of Waterloo", "Oxford University", "Cambridge University",
    "Imperial College London", "University College London",
];

/// Aliases tried after the full-name pass, in priority order. Each rule maps
/// any of its needles to a canonical name.
const SCHOOL_ALIASES: &[(&[&str], &str)] = &[
    (&["harvard"], "Harvard University"),
    (&["stanford"], "Stanford University"),
    (&["mit", "massachusetts institute"], "MIT"),
    (&["caltech", "california institute"], "California Institute of Technology"),
    (&["princeton"], "Princeton University"),
    (&["yale"], "Yale University"),
    (&["uchicago", "university of chicago"], "University of Chicago"),
    (&["columbia"], "Columbia University"),
    (&["upenn", "university of pennsylvania"], "University of Pennsylvania"),
    (&["duke"], "Duke University"),
    (&["northwestern"], "Northwestern University"),
    (&["johns hopkins"], "Johns Hopkins University"),
    (&["cornell"], "Cornell University"),
    (&["brown"], "Brown University"),
    (&["rice"], "Rice University"),
    (&["vanderbilt"], "Vanderbilt University"),
    (&["washington university"], "Washington University in St. Louis"),
    (&["emory"], "Emory University"),
    (&["georgetown"], "Georgetown University"),
    (&["notre dame"], "University of Notre Dame"),
    (&["carnegie mellon", "cmu"], "Carnegie Mellon University"),
    (&["university of virginia", "uva"], "University of Virginia"),
    (&["wake forest"], "Wake Forest University"),
    (&["uc berkeley", "university of california berkeley"], "University of California Berkeley"),
    (&["ucla", "university of california los angeles"], "University of California Los Angeles"),
    (&["university of michigan", "umich"], "University of Michigan"),
    (&["unc", "university of north carolina"], "University of North Carolina Chapel Hill"),
    (&["georgia tech", "georgia institute"], "Georgia Institute of Technology"),
    (&["university of wisconsin"], "University of Wisconsin Madison"),
    (&["uiuc", "university of illinois"], "University of Illinois Urbana Champaign"),
    (&["penn state", "pennsylvania state"], "Pennsylvania State University"),
    (&["ohio state", "osu"], "Ohio State University"),
    (&["university of texas", "utexas"], "University of Texas Austin"),
    (&["university of florida", "uf"], "University of Florida"),
    (&["university of washington", "uw"], "University of Washington"),
    (&["university of minnesota"], "University of Minnesota"),
    (&["university of maryland"], "University of Maryland College Park"),
    (&["purdue"], "Purdue University"),
    (&["university of colorado"], "University of Colorado Boulder"),
    (&["arizona state", "asu"], "Arizona State University"),
    (&["university of arizona", "ua"], "University of Arizona"),
    (&["university of oregon"], "University of Oregon"),
    (&["university of utah"], "University of Utah"),
    (&["nyu", "new york university"], "New York University"),
    (&["boston university", "bu"], "Boston University"),
    (&["northeastern"], "Northeastern University"),
    (&["usc", "university of southern california"], "University of Southern California"),
    (&["tufts"], "Tufts University"),
    (&["brandeis"], "Brandeis University"),
    (&["case western"], "Case Western Reserve University"),
    (&["tulane"], "Tulane University"),
    (&["university of rochester"], "University of Rochester"),
    (&["rpi", "rensselaer polytechnic"], "Rensselaer Polytechnic Institute"),
    (&["stevens institute"], "Stevens Institute of Technology"),
    (&["wpi", "worcester polytechnic"], "Worcester Polytechnic Institute"),
    (&["lehigh"], "Lehigh University"),
    (&["villanova"], "Villanova University"),
    (&["santa clara"], "Santa Clara University"),
];

/// Needles this short are abbreviations and must stand alone as a word.
const MAX_ABBREVIATION_CHARS: usize = 4;

/// How a gazetteer needle is tested against a lowercased line.
#[derive(Debug)]
enum Matcher {
    Contains(String),
    Word(Regex),
}

impl Matcher {
    fn for_needle(needle: &str) -> Option<Self> {
        let needle = needle.to_lowercase();
        if needle.chars().count() > MAX_ABBREVIATION_CHARS {
            return Some(Matcher::Contains(needle));
        }
        Regex::new(&format!(r"\b{}\b", regex::escape(&needle)))
            .map(Matcher::Word)
            .map_err(|e| tracing::warn!("Skipping gazetteer alias '{}': {}", needle, e))
            .ok()
    }

    fn is_match(&self, lowered_line: &str) -> bool {
        match self {
            Matcher::Contains(needle) => lowered_line.contains(needle.as_str()),
            Matcher::Word(re) => re.is_match(lowered_line),
        }
    }
}

/// One ordered gazetteer entry: a predicate and the name it resolves to.
#[derive(Debug)]
struct SchoolRule {
    matchers: Vec<Matcher>,
    canonical: &'static str,
}

impl SchoolRule {
    fn is_match(&self, lowered_line: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(lowered_line))
    }
}

static FULL_NAME_RULES: Lazy<Vec<SchoolRule>> = Lazy::new(|| {
    KNOWN_SCHOOLS
        .iter()
        .map(|school| SchoolRule {
            matchers: Matcher::for_needle(school).into_iter().collect(),
            canonical: *school,
        })
        .collect()
});

static ALIAS_RULES: Lazy<Vec<SchoolRule>> = Lazy::new(|| {
    SCHOOL_ALIASES
        .iter()
        .map(|(needles, canonical)| SchoolRule {
            matchers: needles.iter().filter_map(|n| Matcher::for_needle(n)).collect(),
            canonical: *canonical,
        })
        .collect()
});

/// Education fields; empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Education {
    pub school: String,
    pub major: String,
    pub gpa: String,
    pub graduation_year: String,
}

pub fn locate_section(lines: &[String]) -> Option<Section> {
    locate_with_chain(EDUCATION_CHAIN, lines)
}

/// Resolves a school name line by line: full names first, then aliases.
/// The first line producing any match decides.
pub fn resolve_school(section_text: &str) -> Option<&'static str> {
    for line in section_text.lines() {
        let lowered = line.trim().to_lowercase();
        let hit = FULL_NAME_RULES
            .iter()
            .chain(ALIAS_RULES.iter())
            .find(|rule| rule.is_match(&lowered));
        if let Some(rule) = hit {
            tracing::debug!("Resolved school '{}' from line '{}'", rule.canonical, line.trim());
            return Some(rule.canonical);
        }
    }
    None
}

pub fn extract_major(section_text: &str) -> Option<String> {
    let lowered = section_text.to_lowercase();
    MAJOR_KEYWORDS
        .iter()
        .find(|kw| lowered.contains(*kw))
        .map(|kw| title_case(kw))
}

pub fn extract_gpa(section_text: &str) -> Option<String> {
    GPA_RE
        .captures(section_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn extract_graduation_year(section_text: &str) -> Option<String> {
    YEAR_RE.find(section_text).map(|m| m.as_str().to_string())
}

pub fn extract_education(lines: &[String]) -> Education {
    let Some(section) = locate_section(lines) else {
        tracing::debug!("No education section found");
        return Education::default();
    };
    let text = section.text();
    tracing::debug!("Education section found at line {} ({} lines)", section.start(), section.lines.len());

    Education {
        school: resolve_school(&text).map(str::to_string).unwrap_or_default(),
        major: extract_major(&text).unwrap_or_default(),
        gpa: extract_gpa(&text).unwrap_or_default(),
        graduation_year: extract_graduation_year(&text).unwrap_or_default(),
    }
}

/// Capitalizes the first letter of every space-separated word.
pub(crate) fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
