/// Known skills grouped by category. Matched case-insensitively as whole terms.
pub const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "swift",
            "kotlin",
        ],
    ),
    (
        "web",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "django", "flask", "spring",
            "express",
        ],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle"],
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "ci/cd"],
    ),
    (
        "ml_ai",
        &[
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "nlp",
            "neural networks",
        ],
    ),
    (
        "tools",
        &["git", "github", "jira", "agile", "scrum", "linux", "unix"],
    ),
];

/// Every catalog skill in category order.
pub fn catalog_skills() -> impl Iterator<Item = &'static str> {
    SKILL_CATALOG
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
}

/// True when `term` occurs in `text` without an alphanumeric character directly
/// before or after it, so "go" does not match inside "google".
pub fn contains_term(text: &str, term: &str) -> bool {
    text.match_indices(term).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_boundaries() {
        assert!(contains_term("golang and go tooling", "go"));
        assert!(!contains_term("google cloud", "go"));
        assert!(contains_term("c++, rust", "c++"));
        assert!(contains_term("node.js", "node.js"));
        assert!(!contains_term("javascript", "java"));
    }

    #[test]
    fn test_catalog_is_flattened_in_order() {
        let skills: Vec<_> = catalog_skills().collect();
        assert_eq!(skills.first(), Some(&"python"));
        assert_eq!(skills.last(), Some(&"unix"));
        assert!(skills.contains(&"machine learning"));
    }
}
