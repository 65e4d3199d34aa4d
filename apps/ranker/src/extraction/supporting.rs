use regex::Regex;

use crate::extraction::vocabulary::SupportingCategory;
use crate::models::NOT_FOUND;

/// Collects certification, internship, project, award and volunteer lines.
///
/// A match runs from the category keyword to the end of its line. Matches
/// never overlap, so a second keyword on an already matched line is skipped.
#[derive(Debug, Clone)]
pub struct SupportingInfoExtractor {
    categories: Vec<(String, Regex)>,
}

impl SupportingInfoExtractor {
    pub fn new(categories: &[SupportingCategory]) -> Result<Self, regex::Error> {
        let categories = categories
            .iter()
            .map(|c| {
                let re = Regex::new(&format!(r"(?i){}[^\n]*", regex::escape(&c.keyword)))?;
                Ok((c.label.clone(), re))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { categories })
    }

    /// One `"<Label>: a, b"` line per category that matched, or `N/A`.
    pub fn extract(&self, text: &str) -> String {
        let blocks: Vec<String> = self
            .categories
            .iter()
            .filter_map(|(label, re)| {
                let matches: Vec<&str> = re.find_iter(text).map(|m| m.as_str().trim()).collect();
                if matches.is_empty() {
                    None
                } else {
                    Some(format!("{label}: {}", matches.join(", ")))
                }
            })
            .collect();

        if blocks.is_empty() {
            NOT_FOUND.to_string()
        } else {
            blocks.join("\n")
        }
    }
}
