// src/extractors/skills.rs
use crate::extractors::education::title_case;
use crate::extractors::section::{locate_with_chain, KeywordStrategy, Section, SectionStrategy, SECTION_WINDOW};

pub const SKILL_SECTION_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "programming languages",
    "tools",
];

static SKILLS_CHAIN: &[&dyn SectionStrategy] = &[&KeywordStrategy {
    keywords: SKILL_SECTION_KEYWORDS,
    window: SECTION_WINDOW,
}];

/// Vocabulary in result order. Matching is plain case-insensitive containment.
const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python", "javascript", "java", "c++", "c#", "c", "go", "rust", "swift", "kotlin", "php",
    "ruby", "scala", "r", "matlab", "typescript",
    // Web
    "react", "angular", "vue", "node.js", "node", "express", "django", "flask", "spring",
    "laravel", "rails", "html", "css", "sass", "scss", "bootstrap", "tailwind", "jquery",
    "next.js", "nuxt", "svelte", "ember", "backbone",
    // Databases
    "sql", "mysql", "postgresql", "postgres", "mongodb", "redis", "sqlite", "oracle",
    "sql server", "dynamodb", "cassandra", "neo4j",
    // Cloud & DevOps
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins", "git", "github",
    "gitlab", "terraform", "ansible", "chef", "puppet",
    // AI/ML
    "machine learning", "deep learning", "ai", "artificial intelligence", "tensorflow",
    "pytorch", "scikit-learn", "pandas", "numpy", "opencv", "nlp",
    "natural language processing", "computer vision", "data science", "jupyter", "kaggle",
    // Mobile
    "ios", "android", "react native", "flutter", "xamarin", "ionic", "cordova",
    // Other technologies
    "linux", "unix", "bash", "powershell", "apache", "nginx", "elasticsearch", "kibana",
    "grafana", "prometheus", "microservices", "rest api", "graphql", "websockets", "rabbitmq",
    "kafka", "spark", "hadoop",
    // Tools & software
    "photoshop", "illustrator", "figma", "sketch", "tableau", "power bi", "excel", "word",
    "powerpoint", "slack", "jira", "confluence",
    // Soft skills
    "leadership", "teamwork", "communication", "project management", "agile", "scrum", "kanban",
];

/// Display forms that per-word capitalization would get wrong.
const CANONICAL_OVERRIDES: &[(&str, &str)] = &[
    ("ai", "AI"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("sql", "SQL"),
    ("aws", "AWS"),
    ("gcp", "GCP"),
    ("nlp", "NLP"),
    ("api", "API"),
    ("c++", "C++"),
    ("c#", "C#"),
    ("node.js", "Node.js"),
    ("node", "Node.js"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("vue", "Vue.js"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("scikit-learn", "Scikit-learn"),
    ("rest api", "REST API"),
    ("graphql", "GraphQL"),
];

/// Display form of a vocabulary term.
pub fn canonical_skill(term: &str) -> String {
    CANONICAL_OVERRIDES
        .iter()
        .find(|(raw, _)| *raw == term)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| title_case(term))
}

pub fn locate_section(lines: &[String]) -> Option<Section> {
    locate_with_chain(SKILLS_CHAIN, lines)
}

/// Skills found in the skills section, or in the whole text when there is
/// no such section. Ordered by vocabulary, without duplicate display forms.
pub fn extract_skills(lines: &[String], text: &str) -> Vec<String> {
    let scope = match locate_section(lines) {
        Some(section) => {
            tracing::debug!("Skills section found at line {}", section.start());
            section.text().to_lowercase()
        }
        None => {
            tracing::debug!("No skills section, scanning the whole document");
            text.to_lowercase()
        }
    };

    let mut skills: Vec<String> = Vec::new();
    for term in SKILL_VOCABULARY.iter().filter(|term| scope.contains(**term)) {
        let display = canonical_skill(term);
        if !skills.contains(&display) {
            skills.push(display);
        }
    }
    tracing::debug!("Found {} skills", skills.len());
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::section::normalize_lines;

    fn skills(text: &str) -> Vec<String> {
        extract_skills(&normalize_lines(text), text)
    }

    #[test]
    fn test_repeated_mentions_yield_one_entry() {
        let found = skills("React React react");
        assert_eq!(found.iter().filter(|s| *s == "React").count(), 1);
    }

    #[test]
    fn test_aliases_collapse_to_one_display_form() {
        let found = skills("Skills: node, Node.js, postgres, PostgreSQL");
        assert_eq!(found.iter().filter(|s| *s == "Node.js").count(), 1);
        assert_eq!(found.iter().filter(|s| *s == "PostgreSQL").count(), 1);
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(canonical_skill("ai"), "AI");
        assert_eq!(canonical_skill("c++"), "C++");
        assert_eq!(canonical_skill("node"), "Node.js");
        assert_eq!(canonical_skill("machine learning"), "Machine Learning");
        assert_eq!(canonical_skill("power bi"), "Power Bi");
    }

    #[test]
    fn test_result_follows_vocabulary_order() {
        let found = skills("Skills\nKubernetes, Docker, Python");
        let python = found.iter().position(|s| s == "Python").unwrap();
        let docker = found.iter().position(|s| s == "Docker").unwrap();
        let kubernetes = found.iter().position(|s| s == "Kubernetes").unwrap();
        assert!(python < docker && docker < kubernetes);
    }

    #[test]
    fn test_section_scope_excludes_text_outside_window() {
        let mut text = String::from("Jane Doe\nTerraform admin\nSkills\nPython\n");
        for i in 0..25 {
            text.push_str(&format!("filler {i}\n"));
        }
        text.push_str("Kafka\n");
        let found = skills(&text);
        assert!(found.contains(&"Python".to_string()));
        assert!(!found.contains(&"Terraform".to_string()));
        assert!(!found.contains(&"Kafka".to_string()));
    }

    #[test]
    fn test_whole_text_fallback() {
        let found = skills("Jane Doe\nBuilt dashboards in Tableau");
        assert!(found.contains(&"Tableau".to_string()));
    }

    #[test]
    fn test_nothing_matches_empty_text() {
        assert!(skills("").is_empty());
    }
}
