//! Static skill catalog used for typeahead suggestion and canonical casing.
//!
//! The catalog is a whitelist for suggestions only — unknown tags are never
//! rejected, they just keep the user's casing.

use std::sync::LazyLock;

/// Known skill names, unsorted. Sorted once at catalog init.
const KNOWN_SKILLS: &[&str] = &[
    // Programming & Dev
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "Swift", "Kotlin",
    "PHP", "Ruby", "HTML", "CSS", "React", "Angular", "Vue.js", "Next.js", "Node.js", "Django",
    "Flask", "Spring Boot", ".NET", "SQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "GraphQL",
    "REST API", "Docker", "Kubernetes", "AWS", "Azure", "Google Cloud", "Terraform", "Jenkins",
    "Git", "CI/CD",
    // Data & AI
    "Machine Learning", "Deep Learning", "Data Analysis", "Data Visualization", "TensorFlow",
    "PyTorch", "Pandas", "NumPy", "Scikit-learn", "Tableau", "Power BI", "Excel", "Statistics",
    "NLP", "Computer Vision",
    // Design
    "UI Design", "UX Design", "Figma", "Adobe XD", "Photoshop", "Illustrator", "Sketch",
    "Prototyping", "Wireframing", "User Research", "Web Design", "Graphic Design",
    // Soft Skills & Business
    "Project Management", "Agile", "Scrum", "Communication", "Leadership", "Teamwork",
    "Problem Solving", "Time Management", "Critical Thinking", "Public Speaking", "Writing",
    "Negotiation", "Sales", "Marketing", "SEO", "Content Strategy", "Social Media Marketing",
    "Product Management", "Business Analysis",
];

/// Maximum number of typeahead suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Alphabetically sorted, read-only set of known skill names.
#[derive(Debug)]
pub struct SkillCatalog {
    entries: Vec<&'static str>,
}

static CATALOG: LazyLock<SkillCatalog> = LazyLock::new(|| {
    let mut entries = KNOWN_SKILLS.to_vec();
    entries.sort_unstable();
    SkillCatalog { entries }
});

/// The process-wide catalog instance.
pub fn skill_catalog() -> &'static SkillCatalog {
    &CATALOG
}

impl SkillCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[&'static str] {
        &self.entries
    }

    /// Resolve a raw tag to its canonical catalog casing, if known.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.eq_ignore_ascii_case(raw))
            .copied()
    }

    /// Typeahead suggestions: catalog entries whose lowercase form contains
    /// the lowercase input and that are not already selected
    /// (case-insensitive), first `MAX_SUGGESTIONS` in catalog order.
    pub fn suggest(&self, input: &str, selected: &[String]) -> Vec<&'static str> {
        if input.is_empty() {
            return Vec::new();
        }
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .filter(|entry| !selected.iter().any(|s| s.eq_ignore_ascii_case(entry)))
            .take(MAX_SUGGESTIONS)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_nonempty() {
        let catalog = skill_catalog();
        assert!(!catalog.is_empty());
        assert!(catalog.entries().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let catalog = skill_catalog();
        assert_eq!(catalog.resolve("python"), Some("Python"));
        assert_eq!(catalog.resolve("VUE.JS"), Some("Vue.js"));
        assert_eq!(catalog.resolve("COBOL"), None);
    }

    #[test]
    fn suggest_matches_substring_in_catalog_order() {
        let catalog = skill_catalog();
        let suggestions = catalog.suggest("java", &[]);
        assert_eq!(suggestions, vec!["Java", "JavaScript"]);
    }

    #[test]
    fn suggest_excludes_selected_case_insensitively() {
        let catalog = skill_catalog();
        let selected = vec!["java".to_string()];
        let suggestions = catalog.suggest("java", &selected);
        assert_eq!(suggestions, vec!["JavaScript"]);
    }

    #[test]
    fn suggest_caps_at_five() {
        let catalog = skill_catalog();
        // "a" matches far more than five entries
        assert_eq!(catalog.suggest("a", &[]).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn empty_input_yields_no_suggestions() {
        assert!(skill_catalog().suggest("", &[]).is_empty());
    }
}
