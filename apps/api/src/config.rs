use anyhow::{Context, Result};

/// Default daily word quota per token when `DAILY_WORD_LIMIT` is not set.
pub const DEFAULT_DAILY_WORD_LIMIT: u64 = 80_000;

/// Application configuration loaded from environment variables.
/// All variables are optional and fall back to sane defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of words a single token may justify per UTC day.
    pub daily_word_limit: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            daily_word_limit: std::env::var("DAILY_WORD_LIMIT")
                .unwrap_or_else(|_| DEFAULT_DAILY_WORD_LIMIT.to_string())
                .parse::<u64>()
                .context("DAILY_WORD_LIMIT must be a non-negative integer")?,
        })
    }
}
