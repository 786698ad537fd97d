use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; a missing model credential degrades the
/// assessment endpoints to their fallback responses instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    /// Overrides the Gemini REST base URL (proxies, local stubs).
    pub gemini_api_base: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            google_api_key: lookup("GOOGLE_API_KEY").filter(|key| !key.trim().is_empty()),
            gemini_api_base: lookup("GEMINI_API_BASE").filter(|url| !url.trim().is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
