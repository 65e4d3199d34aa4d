//! Experience scoring — weighted keyword frequency bucketed into 1..=3.
//!
//! For each `(keyword, weight)` of a category the scorer counts whole-word,
//! case-insensitive occurrences and adds `weight × count`. The total maps to:
//! `> 15` → 3, `> 5` → 2, anything else → 1. There is no zero score.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::vocabulary::{Vocabulary, WeightedKeyword};
use crate::extraction::whole_word;

const HIGH_THRESHOLD: u32 = 15;
const MODERATE_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    GenAi,
    AiMl,
}

impl ScoreCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreCategory::GenAi => "gen ai",
            ScoreCategory::AiMl => "ai/ml",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gen ai" => Ok(ScoreCategory::GenAi),
            "ai/ml" => Ok(ScoreCategory::AiMl),
            other => Err(format!("Unknown experience category: {other}")),
        }
    }
}

/// Bucketed experience level. `Exposed` is the floor every resume gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Exposed = 1,
    Moderate = 2,
    High = 3,
}

impl ExperienceLevel {
    pub fn from_weighted_total(total: u32) -> Self {
        if total > HIGH_THRESHOLD {
            ExperienceLevel::High
        } else if total > MODERATE_THRESHOLD {
            ExperienceLevel::Moderate
        } else {
            ExperienceLevel::Exposed
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone)]
struct CompiledKeyword {
    pattern: Regex,
    weight: u32,
}

/// Scores resume text for both experience categories.
#[derive(Debug, Clone)]
pub struct ExperienceScorer {
    gen_ai: Vec<CompiledKeyword>,
    ai_ml: Vec<CompiledKeyword>,
}

impl ExperienceScorer {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, regex::Error> {
        Ok(Self {
            gen_ai: compile(&vocabulary.gen_ai_keywords)?,
            ai_ml: compile(&vocabulary.ai_ml_keywords)?,
        })
    }

    /// Σ weight × occurrences over the category's keyword table, saturating
    /// at `u32::MAX`.
    pub fn weighted_total(&self, text: &str, category: ScoreCategory) -> u32 {
        let keywords = match category {
            ScoreCategory::GenAi => &self.gen_ai,
            ScoreCategory::AiMl => &self.ai_ml,
        };
        keywords.iter().fold(0u32, |total, k| {
            let count = u32::try_from(k.pattern.find_iter(text).count()).unwrap_or(u32::MAX);
            total.saturating_add(k.weight.saturating_mul(count))
        })
    }

    pub fn level(&self, text: &str, category: ScoreCategory) -> ExperienceLevel {
        ExperienceLevel::from_weighted_total(self.weighted_total(text, category))
    }

    /// Experience score in `1..=3`.
    pub fn score(&self, text: &str, category: ScoreCategory) -> u8 {
        self.level(text, category).score()
    }
}

fn compile(keywords: &[WeightedKeyword]) -> Result<Vec<CompiledKeyword>, regex::Error> {
    keywords
        .iter()
        .map(|k| {
            Ok(CompiledKeyword {
                pattern: whole_word(&k.keyword)?,
                weight: k.weight,
            })
        })
        .collect()
}
