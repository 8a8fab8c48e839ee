// src/extractors/contact.rs
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Failed to compile EMAIL_RE")
});

// Optional +1 country code, optional parentheses around the area code,
// dash/dot/space separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
        .expect("Failed to compile PHONE_RE")
});

/// Contact and identity fields pulled from the top of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// First email address anywhere in the document.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First North-American phone number anywhere in the document, as written.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// First and last name from the first non-empty line. Single-character
/// tokens are skipped and anything past the second token is dropped.
pub fn extract_name(lines: &[String]) -> (String, String) {
    let Some(first_line) = lines.first() else {
        return (String::new(), String::new());
    };

    let mut tokens = first_line
        .split_whitespace()
        .filter(|word| word.chars().count() > 1);

    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.next().unwrap_or_default().to_string();
    (first, last)
}

pub fn extract_contact(lines: &[String], text: &str) -> Contact {
    let (first_name, last_name) = extract_name(lines);
    let contact = Contact {
        first_name,
        last_name,
        email: extract_email(text).unwrap_or_default(),
        phone: extract_phone(text).unwrap_or_default(),
    };
    tracing::debug!(
        "Contact: name found: {}, email found: {}, phone found: {}",
        !contact.first_name.is_empty(),
        !contact.email.is_empty(),
        !contact.phone.is_empty()
    );
    contact
}
