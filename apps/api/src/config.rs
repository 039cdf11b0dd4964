use anyhow::{ensure, Context, Result};

use crate::ats::DEFAULT_SKILL_SIMILARITY_THRESHOLD;

const DEFAULT_MAX_BATCH_SIZE: usize = 50;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Similarity ratio at which two skill names count as a match.
    pub skill_similarity_threshold: f64,
    /// Upper bound on the number of items accepted by the batch endpoint.
    pub max_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            skill_similarity_threshold: DEFAULT_SKILL_SIMILARITY_THRESHOLD,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            skill_similarity_threshold: parse_env(
                "SKILL_SIMILARITY_THRESHOLD",
                defaults.skill_similarity_threshold,
            )
            .context("SKILL_SIMILARITY_THRESHOLD must be a number")?,
            max_batch_size: parse_env("MAX_BATCH_SIZE", defaults.max_batch_size)
                .context("MAX_BATCH_SIZE must be a positive integer")?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.skill_similarity_threshold > 0.0 && self.skill_similarity_threshold <= 1.0,
            "SKILL_SIMILARITY_THRESHOLD must be within (0, 1], got {}",
            self.skill_similarity_threshold
        );
        ensure!(self.max_batch_size > 0, "MAX_BATCH_SIZE must be at least 1");
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        Err(_) => Ok(default),
    }
}
