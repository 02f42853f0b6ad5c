use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// The Gemini API key is deliberately optional: without a key the service
/// still starts and serves analyses, with AI feedback degraded to the static
/// fallback tips.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub skill_catalog_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_MODEL.to_string()),
            skill_catalog_path: optional_env("SKILL_CATALOG_PATH").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset AND empty-string variables as absent, so a blank
/// `GEMINI_API_KEY=` line in .env degrades cleanly instead of producing a
/// client that fails every call with a confusing HTTP 400.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
