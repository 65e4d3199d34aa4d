use regex::Regex;

use crate::models::NOT_FOUND;

const GRADE_PATTERN: &str = r"(?i)(CGPA|GPA|Percentage)\s*[:\-]?\s*([\d.]+(?:/\d+)?|\d{1,2}\.\d+)";

/// Reads the first CGPA, GPA or percentage figure.
#[derive(Debug, Clone)]
pub struct GradeExtractor {
    pattern: Regex,
}

impl GradeExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(GRADE_PATTERN)?,
        })
    }

    /// Numeric part only, e.g. `9.2/10` for `CGPA: 9.2/10`.
    pub fn extract(&self, text: &str) -> String {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> String {
        GradeExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_cgpa_with_denominator() {
        assert_eq!(extract("CGPA: 9.2/10"), "9.2/10");
    }

    #[test]
    fn test_percentage_with_dash() {
        assert_eq!(extract("Percentage - 85.0 in class XII"), "85.0");
    }

    #[test]
    fn test_label_is_case_insensitive() {
        assert_eq!(extract("gpa 3.8"), "3.8");
    }

    #[test]
    fn test_no_grade() {
        assert_eq!(extract("Graduated with honours"), NOT_FOUND);
    }
}
