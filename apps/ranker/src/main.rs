mod config;
mod discovery;
mod errors;
mod extraction;
mod models;
mod output;
mod pipeline;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::discovery::discover_documents;
use crate::extraction::vocabulary::Vocabulary;
use crate::extraction::ResumeExtractor;
use crate::output::write_report;
use crate::pipeline::text_source::{DocumentTextSource, TimedTextSource};
use crate::pipeline::RankingPipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "ranker")]
#[command(about = "Extract, score and rank resumes", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON vocabulary overriding the built-in tables
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    /// Documents processed at once (defaults to RANKER_CONCURRENCY)
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every .pdf and .txt resume in a folder and write the table
    Rank {
        /// Folder containing the resumes
        input_dir: PathBuf,

        /// Output file; `.xlsx` writes a workbook, `.json` the full report, anything else CSV
        #[arg(short, long, default_value = "resumes_info.xlsx")]
        output: PathBuf,

        /// Descend into subfolders
        #[arg(long)]
        recursive: bool,
    },
    /// Start the HTTP API
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.vocabulary {
        config.vocabulary_path = Some(path);
    }
    if let Some(n) = cli.concurrency {
        config.concurrency = n.max(1);
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume ranker v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = Vocabulary::load_or_default(config.vocabulary_path.as_deref())
        .context("Failed to load vocabulary")?;
    let extractor = ResumeExtractor::new(&vocabulary).context("Failed to compile vocabulary")?;
    let pipeline = Arc::new(RankingPipeline::new(Arc::new(extractor), config.concurrency));
    info!(
        "Pipeline ready (concurrency: {}, text timeout: {:?})",
        config.concurrency, config.text_source_timeout
    );

    match cli.command {
        Commands::Rank {
            input_dir,
            output,
            recursive,
        } => rank(&config, &pipeline, &input_dir, &output, recursive).await,
        Commands::Serve => serve(config, pipeline).await,
    }
}

async fn rank(
    config: &Config,
    pipeline: &RankingPipeline,
    input_dir: &Path,
    output: &Path,
    recursive: bool,
) -> Result<()> {
    let documents = discover_documents(input_dir, recursive)?;
    info!("Found {} resumes in {}", documents.len(), input_dir.display());

    let source = TimedTextSource::new(DocumentTextSource, config.text_source_timeout);
    let report = pipeline.run(&source, documents).await;

    let format = write_report(output, &report)?;
    info!(
        "Wrote {} candidates ({:?}) to {}; {} documents failed",
        report.candidates.len(),
        format,
        output.display(),
        report.failed.len()
    );
    Ok(())
}

async fn serve(config: Config, pipeline: Arc<RankingPipeline>) -> Result<()> {
    let text_source = Arc::new(TimedTextSource::new(
        DocumentTextSource,
        config.text_source_timeout,
    ));

    // Build app state
    let state = AppState {
        config: config.clone(),
        pipeline,
        text_source,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
