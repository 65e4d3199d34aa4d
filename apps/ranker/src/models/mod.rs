pub mod record;
pub mod report;

pub use record::{
    FailedDocument, RankedRecord, ResumeRecord, COLUMNS, NOT_FOUND, UNIDENTIFIED_DISCIPLINE,
};
pub use report::RankingReport;
