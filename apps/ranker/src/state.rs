use std::sync::Arc;

use crate::config::Config;
use crate::pipeline::text_source::TextSource;
use crate::pipeline::RankingPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pipeline: Arc<RankingPipeline>,
    /// Pluggable text source. Default: `TimedTextSource<DocumentTextSource>`.
    pub text_source: Arc<dyn TextSource>,
}
