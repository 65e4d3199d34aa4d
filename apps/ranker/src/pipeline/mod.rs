//! Ranking pipeline — documents in, `RankingReport` out.
//!
//! Every document reaches a terminal state before ranking starts.

pub mod corpus;
pub mod text_source;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::extraction::ResumeExtractor;
use crate::models::RankingReport;
use crate::scoring::rank_records;

use corpus::CorpusProcessor;
use text_source::{Document, TextSource};

pub struct RankingPipeline {
    extractor: Arc<ResumeExtractor>,
    processor: CorpusProcessor,
}

impl RankingPipeline {
    pub fn new(extractor: Arc<ResumeExtractor>, concurrency: usize) -> Self {
        Self {
            processor: CorpusProcessor::new(extractor.clone(), concurrency),
            extractor,
        }
    }

    pub fn extractor(&self) -> &Arc<ResumeExtractor> {
        &self.extractor
    }

    pub async fn run(&self, source: &dyn TextSource, documents: Vec<Document>) -> RankingReport {
        let run_id = Uuid::new_v4();
        info!("Ranking run {run_id}: {} documents", documents.len());

        let outcome = self.processor.process(source, documents).await;
        let candidates = rank_records(outcome.built);

        info!(
            "Ranking run {run_id} complete: {} ranked, {} failed",
            candidates.len(),
            outcome.failed.len()
        );

        RankingReport {
            run_id,
            generated_at: Utc::now(),
            candidates,
            failed: outcome.failed,
        }
    }
}
