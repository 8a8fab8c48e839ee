// src/utils/debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractors::section::{normalize_lines, Section};
use crate::extractors::{education, experience, projects, skills};
use crate::utils::error::AppError;

type Locator = fn(&[String]) -> Option<Section>;

const SECTION_LOCATORS: [(&str, Locator); 4] = [
    ("education", education::locate_section),
    ("skills", skills::locate_section),
    ("experience", experience::locate_section),
    ("projects", projects::locate_section),
];

/// Renders which strategy located each section and the lines it picked,
/// each prefixed by its index in the normalized document.
pub fn build_section_report(text: &str) -> String {
    let lines = normalize_lines(text);
    let mut report = format!("normalized lines: {}\n", lines.len());

    for (kind, locate) in SECTION_LOCATORS {
        report.push('\n');
        match locate(&lines) {
            Some(section) => {
                report.push_str(&format!(
                    "== {} (strategy: {}, {} lines)\n",
                    kind,
                    section.strategy,
                    section.lines.len()
                ));
                for (number, line) in section.line_numbers.iter().zip(&section.lines) {
                    report.push_str(&format!("{:>4} | {}\n", number, line));
                }
            }
            None => report.push_str(&format!("== {} (not found)\n", kind)),
        }
    }
    report
}

/// Writes the section report for `text` to `filename`.
pub fn write_section_report(text: &str, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;
    file.write_all(build_section_report(text).as_bytes())?;

    tracing::info!("Saved section report to {}", filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_section_kind() {
        let report = build_section_report("Jane Doe\nEducation\nUniversity of Oregon\nhello there");
        assert!(report.starts_with("normalized lines: 4\n"));
        assert!(report.contains("== education (strategy: keyword, 3 lines)"));
        assert!(report.contains("   1 | Education"));
        assert!(report.contains("== skills (not found)"));
        assert!(report.contains("== experience (not found)"));
        assert!(report.contains("== projects (not found)"));
    }

    #[test]
    fn test_report_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.txt");
        write_section_report("Skills\nRust", &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("== skills (strategy: keyword, 2 lines)"));
    }
}
