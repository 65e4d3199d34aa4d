//! Field extraction — turns raw resume text into a `ResumeRecord`.
//!
//! Every extractor is compiled once from a `Vocabulary` and never fails at
//! extraction time: a miss becomes the `N/A` sentinel.

pub mod cgpa;
pub mod education;
pub mod identity;
pub mod skills;
pub mod supporting;
pub mod university;
pub mod vocabulary;

use regex::Regex;
use serde::Serialize;

use crate::models::ResumeRecord;
use crate::scoring::experience::{ExperienceScorer, ScoreCategory};

use cgpa::GradeExtractor;
use education::{CourseMatcher, DisciplineResolver};
use identity::IdentityExtractor;
use skills::SkillMatcher;
use supporting::SupportingInfoExtractor;
use university::InstitutionExtractor;
use vocabulary::{Vocabulary, VocabularyError};

/// Case-insensitive whole-word pattern for a literal keyword.
pub(crate) fn whole_word(keyword: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
}

/// All field extractors plus the experience scorer, ready to build records.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    identity: IdentityExtractor,
    skills: SkillMatcher,
    course: CourseMatcher,
    discipline: DisciplineResolver,
    grade: GradeExtractor,
    supporting: SupportingInfoExtractor,
    institution: InstitutionExtractor,
    scorer: ExperienceScorer,
}

/// A record together with the raw weighted totals behind its two scores.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionPreview {
    pub record: ResumeRecord,
    pub gen_ai_weighted_total: u32,
    pub ai_ml_weighted_total: u32,
}

impl ResumeExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, VocabularyError> {
        Ok(Self {
            identity: IdentityExtractor::new()?,
            skills: SkillMatcher::new(&vocabulary.skills),
            course: CourseMatcher::new(&vocabulary.courses)?,
            discipline: DisciplineResolver::new(&vocabulary.disciplines)?,
            grade: GradeExtractor::new()?,
            supporting: SupportingInfoExtractor::new(&vocabulary.supporting_categories)?,
            institution: InstitutionExtractor::new(
                &vocabulary.university_keywords,
                vocabulary.recent_year_floor,
            )?,
            scorer: ExperienceScorer::new(vocabulary)?,
        })
    }

    /// Builds the full record for one document's text. Pure: identical text
    /// always yields an identical record.
    pub fn build_record(&self, text: &str) -> ResumeRecord {
        let identity = self.identity.extract(text);
        let institution = self.institution.extract(text);

        ResumeRecord {
            name: identity.name,
            contact_details: identity.contact_details,
            university: institution.university,
            year_of_study: institution.year_of_study,
            course: self.course.extract(text),
            discipline: self.discipline.resolve(text),
            cgpa_or_percentage: self.grade.extract(text),
            key_skills: self.skills.extract(text),
            gen_ai_score: self.scorer.score(text, ScoreCategory::GenAi),
            ai_ml_score: self.scorer.score(text, ScoreCategory::AiMl),
            supporting_info: self.supporting.extract(text),
        }
    }

    pub fn preview(&self, text: &str) -> ExtractionPreview {
        ExtractionPreview {
            record: self.build_record(text),
            gen_ai_weighted_total: self.scorer.weighted_total(text, ScoreCategory::GenAi),
            ai_ml_weighted_total: self.scorer.weighted_total(text, ScoreCategory::AiMl),
        }
    }
}
