// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
/// Lines returned by a keyword-anchored section, anchor line included.
pub const SECTION_WINDOW: usize = 20;
/// Lines returned by a literal "experiences:" / "projects:" anchor.
pub const ANCHOR_WINDOW: usize = 15;
/// Lines shorter than this (in chars, after trimming) are never entry candidates.
const MIN_ENTRY_LINE_CHARS: usize = 6;

// --- Regex Patterns for Noise Filtering (Lazy Static) ---
static PHONE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("Failed to compile PHONE_PREFIX_RE")
});

static URL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://").expect("Failed to compile URL_PREFIX_RE")
});

// --- Data Structures ---
/// A located block of lines, remembering which strategy found it and where
/// each line sat in the normalized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub strategy: &'static str,
    pub lines: Vec<String>,
    pub line_numbers: Vec<usize>,
}

impl Section {
    /// Index of the anchor line in the normalized document.
    pub fn start(&self) -> usize {
        self.line_numbers.first().copied().unwrap_or(0)
    }

    /// The section joined back into one newline-delimited block.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn window(strategy: &'static str, lines: &[String], start: usize, len: usize) -> Self {
        let end = (start + len).min(lines.len());
        Section {
            strategy,
            lines: lines[start..end].to_vec(),
            line_numbers: (start..end).collect(),
        }
    }
}

// --- Line Normalizer ---
/// Splits raw text into trimmed, non-empty lines.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// --- Section Locator ---
/// Finds the first line containing any of `keywords` (case-insensitive) and
/// returns it plus the following lines, `SECTION_WINDOW` in total, as one block.
pub fn locate(lines: &[String], keywords: &[&str]) -> Option<String> {
    find_keyword_window(lines, keywords, SECTION_WINDOW, "keyword").map(|section| section.text())
}

fn find_keyword_window(
    lines: &[String],
    keywords: &[&str],
    window: usize,
    strategy: &'static str,
) -> Option<Section> {
    for (index, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        if let Some(keyword) = keywords.iter().find(|kw| lowered.contains(&kw.to_lowercase())) {
            tracing::trace!("Found section with keyword '{}' at line {}: '{}'", keyword, index, line);
            return Some(Section::window(strategy, lines, index, window));
        }
    }
    tracing::trace!("No section found for keywords: {:?}", keywords);
    None
}

// --- Strategies ---
/// One way of locating a section. Chains of strategies are tried in order.
pub trait SectionStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn locate(&self, lines: &[String]) -> Option<Section>;
}

/// The plain Section Locator: first keyword line plus a fixed window.
pub struct KeywordStrategy {
    pub keywords: &'static [&'static str],
    pub window: usize,
}

impl SectionStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn locate(&self, lines: &[String]) -> Option<Section> {
        find_keyword_window(lines, self.keywords, self.window, self.name())
    }
}

/// A literal label such as "experiences:" and the lines after it.
pub struct AnchorStrategy {
    pub anchor: &'static str,
    pub window: usize,
}

impl SectionStrategy for AnchorStrategy {
    fn name(&self) -> &'static str {
        "anchor"
    }

    fn locate(&self, lines: &[String]) -> Option<Section> {
        let index = lines
            .iter()
            .position(|line| line.to_lowercase().contains(self.anchor))?;
        tracing::trace!("Found '{}' anchor at line {}", self.anchor, index);
        Some(Section::window(self.name(), lines, index, self.window))
    }
}

/// Collects every line in the document that satisfies `predicate`.
pub struct LineScanStrategy {
    pub predicate: fn(&str) -> bool,
}

impl SectionStrategy for LineScanStrategy {
    fn name(&self) -> &'static str {
        "line-scan"
    }

    fn locate(&self, lines: &[String]) -> Option<Section> {
        let (line_numbers, matched): (Vec<usize>, Vec<String>) = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| (self.predicate)(line))
            .map(|(index, line)| (index, line.clone()))
            .unzip();

        if matched.is_empty() {
            return None;
        }
        tracing::trace!("Line scan collected {} lines", matched.len());
        Some(Section {
            strategy: self.name(),
            lines: matched,
            line_numbers,
        })
    }
}

/// Tries each strategy in order and returns the first section found.
pub fn locate_with_chain(chain: &[&dyn SectionStrategy], lines: &[String]) -> Option<Section> {
    chain.iter().find_map(|strategy| {
        let found = strategy.locate(lines);
        if found.is_none() {
            tracing::trace!("Strategy '{}' found nothing, falling through", strategy.name());
        }
        found
    })
}

// --- Shared line filters ---
/// True for lines that can never be an entry: too short, a header word,
/// an email, a phone number or a URL.
pub(crate) fn is_noise_line(line: &str, header_re: &Regex) -> bool {
    line.chars().count() < MIN_ENTRY_LINE_CHARS
        || header_re.is_match(line)
        || line.contains('@')
        || PHONE_PREFIX_RE.is_match(line)
        || URL_PREFIX_RE.is_match(line)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        normalize_lines(text)
    }

    #[test]
    fn test_normalize_drops_blank_lines_and_trims() {
        let normalized = lines("  Jane Doe  \n\n\t\nEducation\r\n   UW   ");
        assert_eq!(normalized, vec!["Jane Doe", "Education", "UW"]);
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\n \n").is_empty());
    }

    #[test]
    fn test_locate_returns_anchor_and_following_lines() {
        let doc = lines("Jane\nEDUCATION\nUniversity of Washington\nGPA: 3.8");
        let section = locate(&doc, &["education"]).expect("section should be found");
        assert_eq!(section, "EDUCATION\nUniversity of Washington\nGPA: 3.8");
    }

    #[test]
    fn test_locate_first_line_wins_over_keyword_order() {
        let doc = lines("Bachelor of Science\nUniversity of Oregon");
        let section = find_keyword_window(&doc, &["university", "bachelor"], SECTION_WINDOW, "keyword")
            .expect("section should be found");
        assert_eq!(section.start(), 0);
    }

    #[test]
    fn test_locate_window_is_clipped_to_twenty_lines() {
        let text = (0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let doc = lines(&format!("Skills\n{text}"));
        let section = KeywordStrategy { keywords: &["skills"], window: SECTION_WINDOW }
            .locate(&doc)
            .expect("section should be found");
        assert_eq!(section.lines.len(), SECTION_WINDOW);
        assert_eq!(section.line_numbers, (0..SECTION_WINDOW).collect::<Vec<_>>());
    }

    #[test]
    fn test_locate_not_found() {
        let doc = lines("nothing relevant here");
        assert!(locate(&doc, &["education"]).is_none());
        assert!(locate(&[], &["education"]).is_none());
    }

    #[test]
    fn test_anchor_strategy_uses_fifteen_line_window() {
        let body = (0..30).map(|i| format!("entry {i}")).collect::<Vec<_>>().join("\n");
        let doc = lines(&format!("Intro\nExperiences:\n{body}"));
        let section = AnchorStrategy { anchor: "experiences:", window: ANCHOR_WINDOW }
            .locate(&doc)
            .expect("anchor should be found");
        assert_eq!(section.start(), 1);
        assert_eq!(section.lines.len(), ANCHOR_WINDOW);
        assert_eq!(section.strategy, "anchor");
    }

    #[test]
    fn test_chain_takes_first_success() {
        fn always(_: &str) -> bool {
            true
        }
        let doc = lines("alpha\nbeta");
        let keyword = KeywordStrategy { keywords: &["gamma"], window: SECTION_WINDOW };
        let scan = LineScanStrategy { predicate: always };
        let section = locate_with_chain(&[&keyword, &scan], &doc).expect("scan should succeed");
        assert_eq!(section.strategy, "line-scan");
        assert_eq!(section.lines, vec!["alpha", "beta"]);

        let nothing = LineScanStrategy { predicate: |_| false };
        assert!(locate_with_chain(&[&keyword, &nothing], &doc).is_none());
    }

    #[test]
    fn test_noise_filter() {
        let header = Regex::new(r"(?i)^(experience|education)").unwrap();
        assert!(is_noise_line("short", &header));
        assert!(is_noise_line("Experience and more", &header));
        assert!(is_noise_line("contact me: jane@x.io", &header));
        assert!(is_noise_line("206-555-1234 mobile", &header));
        assert!(is_noise_line("https://github.com/jane", &header));
        assert!(!is_noise_line("Software Engineer at Google", &header));
    }

    #[test]
    fn test_phone_prefix_is_ascii_digits_only() {
        let header = Regex::new(r"(?i)^(experience|education)").unwrap();
        assert!(!is_noise_line("२०६-५५५-१२३४ mobile", &header));
    }
}
