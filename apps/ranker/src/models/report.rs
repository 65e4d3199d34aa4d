use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{FailedDocument, RankedRecord};

/// Result of one ranking run over one document set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub candidates: Vec<RankedRecord>,
    pub failed: Vec<FailedDocument>,
}
