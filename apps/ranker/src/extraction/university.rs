use regex::Regex;

use crate::models::NOT_FOUND;

const YEAR_PATTERN: &str = r"\b(20[0-9]{2})\b";

/// Institution line and study year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub university: String,
    pub year_of_study: String,
}

/// Finds the institution line and the first recent four-digit year.
///
/// Any qualifying year counts as the study year, including unrelated numbers
/// such as "2024 points".
#[derive(Debug, Clone)]
pub struct InstitutionExtractor {
    university: Option<Regex>,
    year: Regex,
    recent_year_floor: u32,
}

impl InstitutionExtractor {
    pub fn new(keywords: &[String], recent_year_floor: u32) -> Result<Self, regex::Error> {
        let university = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?i)(?:{alternation})[^\n]*"))?)
        };
        Ok(Self {
            university,
            year: Regex::new(YEAR_PATTERN)?,
            recent_year_floor,
        })
    }

    pub fn extract(&self, text: &str) -> Institution {
        Institution {
            university: self.university(text),
            year_of_study: self.year_of_study(text),
        }
    }

    pub fn university(&self, text: &str) -> String {
        self.university
            .as_ref()
            .and_then(|re| re.find(text))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn year_of_study(&self, text: &str) -> String {
        self.year
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .find(|year| {
                year.parse::<u32>()
                    .map(|y| y >= self.recent_year_floor)
                    .unwrap_or(false)
            })
            .map(str::to_string)
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
