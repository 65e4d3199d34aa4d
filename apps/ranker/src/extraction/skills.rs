/// Case-insensitive substring matcher over the skill vocabulary.
///
/// Containment is deliberately loose: one-letter skills such as `R` or `C`
/// match almost any text.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    skills: Vec<(String, String)>, // (display, lowercased)
}

impl SkillMatcher {
    pub fn new(skills: &[String]) -> Self {
        Self {
            skills: skills
                .iter()
                .map(|s| (s.clone(), s.to_lowercase()))
                .collect(),
        }
    }

    /// Matched skills in vocabulary order.
    pub fn matches(&self, text: &str) -> Vec<&str> {
        let text_lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|(_, lower)| text_lower.contains(lower.as_str()))
            .map(|(display, _)| display.as_str())
            .collect()
    }

    /// Matched skills joined with `", "`; empty when nothing matched.
    pub fn extract(&self, text: &str) -> String {
        self.matches(text).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(skills: &[&str]) -> SkillMatcher {
        let owned: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
        SkillMatcher::new(&owned)
    }

    #[test]
    fn test_lowercase_text_matches_vocabulary_case() {
        let m = matcher(&["Python", "Docker"]);
        assert_eq!(m.extract("i write python daily"), "Python");
    }

    #[test]
    fn test_output_follows_vocabulary_order() {
        let m = matcher(&["Python", "Docker", "Kubernetes"]);
        let text = "Kubernetes, then Docker, then Python";
        assert_eq!(m.extract(text), "Python, Docker, Kubernetes");
    }

    #[test]
    fn test_no_match_is_empty() {
        let m = matcher(&["Python"]);
        assert_eq!(m.extract("gardening"), "");
        assert_eq!(m.extract(""), "");
    }

    #[test]
    fn test_substring_containment_is_loose() {
        let m = matcher(&["Go", "R"]);
        // "go" inside "Google", "r" inside "researcher"
        assert_eq!(m.extract("Google researcher"), "Go, R");
    }
}
