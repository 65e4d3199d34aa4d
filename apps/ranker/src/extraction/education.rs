use regex::Regex;

use crate::extraction::vocabulary::DisciplineEntry;
use crate::extraction::whole_word;
use crate::models::{NOT_FOUND, UNIDENTIFIED_DISCIPLINE};

/// Finds the first degree abbreviation in the text.
#[derive(Debug, Clone)]
pub struct CourseMatcher {
    pattern: Option<Regex>,
}

impl CourseMatcher {
    pub fn new(courses: &[String]) -> Result<Self, regex::Error> {
        if courses.is_empty() {
            return Ok(Self { pattern: None });
        }
        let alternation = courses
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            pattern: Some(Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?),
        })
    }

    /// The matched abbreviation as written, with periods removed.
    pub fn extract(&self, text: &str) -> String {
        self.pattern
            .as_ref()
            .and_then(|re| re.find(text))
            .map(|m| m.as_str().replace('.', ""))
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

/// Resolves the field of study by walking the discipline table in order.
///
/// The first synonym with a whole-word hit decides; later disciplines are
/// never consulted once one matches.
#[derive(Debug, Clone)]
pub struct DisciplineResolver {
    entries: Vec<(String, Vec<Regex>)>,
}

impl DisciplineResolver {
    pub fn new(disciplines: &[DisciplineEntry]) -> Result<Self, regex::Error> {
        let entries = disciplines
            .iter()
            .map(|d| {
                let synonyms = d
                    .synonyms
                    .iter()
                    .map(|s| whole_word(s))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((d.name.clone(), synonyms))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { entries })
    }

    pub fn resolve(&self, text: &str) -> String {
        for (name, synonyms) in &self.entries {
            if synonyms.iter().any(|re| re.is_match(text)) {
                return name.clone();
            }
        }
        UNIDENTIFIED_DISCIPLINE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::vocabulary::Vocabulary;

    fn course_matcher() -> CourseMatcher {
        CourseMatcher::new(&Vocabulary::default().courses).unwrap()
    }

    fn resolver() -> DisciplineResolver {
        DisciplineResolver::new(&Vocabulary::default().disciplines).unwrap()
    }

    #[test]
    fn test_course_periods_are_stripped() {
        assert_eq!(course_matcher().extract("Pursuing B.Tech from 2021"), "BTech");
        assert_eq!(course_matcher().extract("Degree: B.Sc. Physics"), "BSc");
    }

    #[test]
    fn test_course_keeps_original_case() {
        assert_eq!(course_matcher().extract("completed my mba last year"), "mba");
    }

    #[test]
    fn test_course_requires_whole_word() {
        assert_eq!(course_matcher().extract("BATTERY research"), NOT_FOUND);
        assert_eq!(course_matcher().extract("BArch, 2020"), "BArch");
    }

    #[test]
    fn test_course_missing() {
        assert_eq!(course_matcher().extract(""), NOT_FOUND);
    }

    #[test]
    fn test_empty_course_table_never_matches() {
        let m = CourseMatcher::new(&[]).unwrap();
        assert_eq!(m.extract("BTech"), NOT_FOUND);
    }

    #[test]
    fn test_first_listed_discipline_wins() {
        let text = "Robotics and Computer Science";
        assert_eq!(resolver().resolve(text), "Computer Science");
    }

    #[test]
    fn test_robotics_alone() {
        assert_eq!(resolver().resolve("Worked in Robotics lab"), "Robotics");
    }

    #[test]
    fn test_synonym_is_whole_word_and_case_insensitive() {
        assert_eq!(resolver().resolve("Degree in mechatronics"), "Robotics");
        // "Automations" is not the whole word "Automation"
        assert_eq!(
            resolver().resolve("Automations hobby"),
            UNIDENTIFIED_DISCIPLINE
        );
    }

    #[test]
    fn test_unidentified_fallback() {
        assert_eq!(resolver().resolve(""), UNIDENTIFIED_DISCIPLINE);
    }

    #[test]
    fn test_substituted_table_order_is_respected() {
        let table = vec![
            DisciplineEntry {
                name: "Robotics".to_string(),
                synonyms: vec!["Robotics".to_string()],
            },
            DisciplineEntry {
                name: "Computer Science".to_string(),
                synonyms: vec!["Computer Science".to_string()],
            },
        ];
        let r = DisciplineResolver::new(&table).unwrap();
        assert_eq!(r.resolve("Robotics and Computer Science"), "Robotics");
    }
}
