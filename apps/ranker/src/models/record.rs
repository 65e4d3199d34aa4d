use serde::{Deserialize, Serialize};

/// Value stored in any field whose extractor found nothing.
pub const NOT_FOUND: &str = "N/A";

/// Discipline reported when no synonym in the vocabulary matched.
pub const UNIDENTIFIED_DISCIPLINE: &str = "Unidentified Discipline";

/// Column headers of the ranked candidate table, in output order.
pub const COLUMNS: [&str; 13] = [
    "Name",
    "Contact Details",
    "University",
    "Year of Study",
    "Course",
    "Discipline",
    "CGPA/Percentage",
    "Key Skills",
    "Gen AI Experience Score",
    "AI/ML Experience Score",
    "Supporting Information",
    "Total Score",
    "Ranking",
];

/// Fields extracted from a single resume. Built once per document and never
/// mutated afterwards; every field is populated, using `N/A` for misses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub contact_details: String,
    pub university: String,
    pub year_of_study: String,
    pub course: String,
    pub discipline: String,
    pub cgpa_or_percentage: String,
    /// Comma-joined, in vocabulary order. Empty when nothing matched.
    pub key_skills: String,
    pub gen_ai_score: u8,
    pub ai_ml_score: u8,
    pub supporting_info: String,
}

impl ResumeRecord {
    pub fn total_score(&self) -> u8 {
        self.gen_ai_score + self.ai_ml_score
    }
}

/// A record placed within its corpus. Only the ranking step creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRecord {
    /// Identifier of the document the record was built from.
    pub source: String,
    #[serde(flatten)]
    pub record: ResumeRecord,
    pub total_score: u8,
    pub rank: u32,
}

impl RankedRecord {
    /// Cells of this row, aligned with [`COLUMNS`].
    pub fn to_row(&self) -> [String; 13] {
        let r = &self.record;
        [
            r.name.clone(),
            r.contact_details.clone(),
            r.university.clone(),
            r.year_of_study.clone(),
            r.course.clone(),
            r.discipline.clone(),
            r.cgpa_or_percentage.clone(),
            r.key_skills.clone(),
            r.gen_ai_score.to_string(),
            r.ai_ml_score.to_string(),
            r.supporting_info.clone(),
            self.total_score.to_string(),
            self.rank.to_string(),
        ]
    }
}

/// A document that never produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDocument {
    pub source: String,
    pub reason: String,
}
