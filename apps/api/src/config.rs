use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::matching::ranking::RankingOptions;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Seed file for candidates and jobs. Falls back to the embedded fixture.
    pub fixtures_path: Option<PathBuf>,
    pub ranking: RankingOptions,
    /// Delay between scored jobs during a ranking run. Zero disables pacing.
    pub pacing: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = RankingOptions::default();

        Ok(Config {
            port: parse_or("PORT", &lookup, 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            fixtures_path: lookup("FIXTURES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            ranking: RankingOptions {
                min_score: parse_or("MATCH_MIN_SCORE", &lookup, defaults.min_score)?,
                top_n: parse_or("MATCH_TOP_N", &lookup, defaults.top_n)?,
            },
            pacing: Duration::from_millis(parse_or("MATCH_PACING_MS", &lookup, 0u64)?),
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
