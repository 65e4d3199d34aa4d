//! Vocabulary — the fixed lookup tables every extractor is compiled from.
//!
//! The built-in tables are plain constants. A JSON file may replace any of
//! them; fields left out of the file keep their built-in value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid vocabulary JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid pattern built from vocabulary: {0}")]
    Pattern(#[from] regex::Error),
}

const SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "TensorFlow",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "AI",
    "SQL",
    "R",
    "Deep Learning",
    "C",
    "Go",
    "Ruby",
    "Rust",
    "Kotlin",
    "PHP",
    "TypeScript",
    "Perl",
    "MATLAB",
    "React.js",
    "Angular",
    "Vue.js",
    "Spring",
    "Django",
    "Flask",
    "AWS",
    "Azure",
    "Google Cloud",
    "OpenCV",
    "NumPy",
    "Pandas",
    "BERT",
    "GPT",
    "Transformers",
    "NLTK",
    "Neural Networks",
    "Data Science",
];

const COURSES: &[&str] = &[
    "BTech", "B.Tech", "BSc", "B.Sc", "MTech", "M.Tech", "MCA", "BCA", "MBA", "BA", "BArch",
    "B.Arch",
];

/// Canonical discipline → synonyms. Both levels are searched in order and the
/// first hit wins, so reordering changes results.
const DISCIPLINES: &[(&str, &[&str])] = &[
    (
        "Computer Science",
        &[
            "Computer Science",
            "CS",
            "CSE",
            "Information Technology",
            "IT",
            "Software Engineering",
        ],
    ),
    (
        "Data Science",
        &[
            "Data Science",
            "Big Data",
            "Data Analytics",
            "Data Engineering",
            "Business Analytics",
        ],
    ),
    (
        "Artificial Intelligence",
        &[
            "AI",
            "Artificial Intelligence",
            "Machine Learning",
            "Deep Learning",
            "Neural Networks",
            "ML",
        ],
    ),
    (
        "Robotics",
        &[
            "Robotics",
            "Robotic Engineering",
            "Automation",
            "Mechatronics",
            "AI Robotics",
        ],
    ),
    (
        "Architecture",
        &["Architecture", "Sustainable Design", "Urban Planning"],
    ),
    (
        "Electrical Engineering",
        &[
            "Electrical Engineering",
            "EEE",
            "Electrical",
            "Electronics",
            "Microelectronics",
            "Power Systems",
            "Electrical Engineering",
        ],
    ),
    (
        "Mechanical Engineering",
        &[
            "Mechanical Engineering",
            "Mechanical",
            "ME",
            "Manufacturing",
            "Production Engineering",
        ],
    ),
    (
        "Civil Engineering",
        &[
            "Civil Engineering",
            "CE",
            "Structural Engineering",
            "Construction Engineering",
        ],
    ),
    ("Chemical Engineering", &["Chemical Engineering", "ChemE"]),
    (
        "Biomedical Engineering",
        &[
            "Biomedical Engineering",
            "BME",
            "Biomedical",
            "Biotechnology",
            "Biomaterials",
            "Healthcare Engineering",
        ],
    ),
    (
        "Management",
        &["Management", "Business Administration", "MBA"],
    ),
    (
        "Mathematics",
        &["Mathematics", "Applied Mathematics", "Pure Mathematics"],
    ),
    (
        "Electronics Engineering",
        &[
            "Electronics Engineering",
            "Electronics",
            "ECE",
            "VLSI",
            "Embedded Systems",
        ],
    ),
];

const GEN_AI_KEYWORDS: &[(&str, u32)] = &[
    ("generative", 1),
    ("transformers", 2),
    ("GPT", 2),
    ("BERT", 2),
    ("large language models", 2),
    ("RAG", 3),
    ("evaluations", 3),
    ("agentic", 3),
    ("deep learning", 2),
];

const AI_ML_KEYWORDS: &[(&str, u32)] = &[
    ("machine learning", 2),
    ("deep learning", 2),
    ("AI", 1),
    ("neural networks", 2),
    ("hands-on", 2),
    ("advanced", 3),
    ("computer vision", 3),
    ("NLP", 3),
    ("data science", 2),
    ("reinforcement learning", 3),
    ("natural language processing", 3),
];

const SUPPORTING_CATEGORIES: &[(&str, &str)] = &[
    ("Certifications", "certification"),
    ("Internships", "internship"),
    ("Projects", "project"),
    ("Awards", "award"),
    ("Volunteer", "volunteer"),
];

const UNIVERSITY_KEYWORDS: &[&str] = &[
    "University",
    "Institute of Technology",
    "College",
    "School of Engineering",
    "Academy",
    "Institute",
];

/// Earliest year treated as a study or graduation year.
const RECENT_YEAR_FLOOR: u32 = 2019;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineEntry {
    pub name: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingCategory {
    /// Label printed in front of the matches, e.g. `Projects`.
    pub label: String,
    /// Text that starts a match, e.g. `project`.
    pub keyword: String,
}

/// Every table the extractors and the experience scorer read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub courses: Vec<String>,
    pub disciplines: Vec<DisciplineEntry>,
    pub gen_ai_keywords: Vec<WeightedKeyword>,
    pub ai_ml_keywords: Vec<WeightedKeyword>,
    pub supporting_categories: Vec<SupportingCategory>,
    pub university_keywords: Vec<String>,
    pub recent_year_floor: u32,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: to_strings(SKILLS),
            courses: to_strings(COURSES),
            disciplines: DISCIPLINES
                .iter()
                .map(|(name, synonyms)| DisciplineEntry {
                    name: name.to_string(),
                    synonyms: to_strings(synonyms),
                })
                .collect(),
            gen_ai_keywords: to_weighted(GEN_AI_KEYWORDS),
            ai_ml_keywords: to_weighted(AI_ML_KEYWORDS),
            supporting_categories: SUPPORTING_CATEGORIES
                .iter()
                .map(|(label, keyword)| SupportingCategory {
                    label: label.to_string(),
                    keyword: keyword.to_string(),
                })
                .collect(),
            university_keywords: to_strings(UNIVERSITY_KEYWORDS),
            recent_year_floor: RECENT_YEAR_FLOOR,
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary from a JSON file.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| VocabularyError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads `path` when given, otherwise returns the built-in tables.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, VocabularyError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_weighted(items: &[(&str, u32)]) -> Vec<WeightedKeyword> {
    items
        .iter()
        .map(|(keyword, weight)| WeightedKeyword {
            keyword: keyword.to_string(),
            weight: *weight,
        })
        .collect()
}
