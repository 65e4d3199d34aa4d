use regex::Regex;

use crate::models::NOT_FOUND;

/// Two or more capitalized words. The first alternative wins whenever two
/// words are available, so a match is normally exactly two words long.
const NAME_PATTERN: &str = r"([A-Z][a-z]+\s[A-Z][a-z]+|[A-Z][a-z]+(?:\s[A-Z][a-z]+)+)";
const EMAIL_PATTERN: &str = r"\S+@\S+";
const PHONE_PATTERN: &str = r"\(?\+?\d{1,4}\)?[-.\s]?\(?\d{1,3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";

/// Name and contact details of a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    /// Always `"<email> | <phone>"`, either side `N/A` when absent.
    pub contact_details: String,
}

/// Pulls the candidate's name, email and phone number out of resume text.
///
/// The name heuristic accepts the first run of capitalized words, which can be
/// a heading such as "Work Experience" rather than a person's name.
#[derive(Debug, Clone)]
pub struct IdentityExtractor {
    name: Regex,
    email: Regex,
    phone: Regex,
}

impl IdentityExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    pub fn extract(&self, text: &str) -> Identity {
        Identity {
            name: self.name(text),
            contact_details: format!("{} | {}", self.email(text), self.phone(text)),
        }
    }

    pub fn name(&self, text: &str) -> String {
        first_match(&self.name, text)
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn email(&self, text: &str) -> String {
        first_match(&self.email, text)
            .map(str::to_string)
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn phone(&self, text: &str) -> String {
        first_match(&self.phone, text)
            .map(str::to_string)
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

fn first_match<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.find(text).map(|m| m.as_str())
}
