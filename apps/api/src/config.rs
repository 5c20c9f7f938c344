use anyhow::{Context, Result};

use crate::coaching::partitioner::PreambleMode;
use crate::llm_client::{Credential, DEFAULT_BASE_URL, DEFAULT_FALLBACK_MODELS, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// The provider key is optional here: a request may carry its own key, and requests
/// without one fail with `InvalidCredential` rather than stopping the server.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<Credential>,
    pub gemini_model: String,
    pub gemini_fallback_models: Vec<String>,
    pub gemini_base_url: String,
    pub preamble_mode: PreambleMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let preamble_mode = match optional_env("PLAN_KEEP_PREAMBLE") {
            Some(raw) => match parse_flag(&raw) {
                Some(true) => PreambleMode::Keep,
                Some(false) => PreambleMode::Drop,
                None => anyhow::bail!("PLAN_KEEP_PREAMBLE must be true or false, got '{raw}'"),
            },
            None => PreambleMode::Drop,
        };

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().and_then(Credential::new),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_fallback_models: optional_env("GEMINI_FALLBACK_MODELS")
                .map(|raw| parse_model_list(&raw))
                .unwrap_or_else(|| {
                    DEFAULT_FALLBACK_MODELS
                        .iter()
                        .map(|m| m.to_string())
                        .collect()
                }),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            preamble_mode,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Comma-separated model ids, blanks skipped, order kept.
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
