use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail at startup; a missing API key surfaces on the first evaluation.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    /// Directory holding the PDFium shared library. Falls back to `./` and the system path.
    pub pdfium_library_path: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            pdfium_library_path: optional_env("PDFIUM_LIBRARY_PATH"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads `key`, treating an unset or blank value as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
