use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub text_source_timeout: Duration,
    pub concurrency: usize,
    pub max_upload_bytes: usize,
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs: u64 = parse_or(&var, "TEXT_SOURCE_TIMEOUT_SECS", 30)?;
        let concurrency: usize = parse_or(&var, "RANKER_CONCURRENCY", 1)?;

        Ok(Config {
            port: parse_or(&var, "PORT", 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            text_source_timeout: Duration::from_secs(timeout_secs),
            concurrency: concurrency.max(1),
            max_upload_bytes: parse_or(&var, "MAX_UPLOAD_BYTES", 25 * 1024 * 1024)?,
            vocabulary_path: var("RANKER_VOCABULARY")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
