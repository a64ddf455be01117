// src/config.rs
use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 8787;
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Runtime configuration, read from the environment once at startup.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// When set, responses carry CORS headers allowing exactly this origin.
    pub cors_origin: Option<String>,
    pub model: String,
    pub api_key: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match non_blank(env::var("PORT").ok()) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let api_key =
            non_blank(env::var("OPENAI_API_KEY").ok()).context("OPENAI_API_KEY is not set")?;

        Ok(Self {
            port,
            cors_origin: non_blank(env::var("CORS_ORIGIN").ok()),
            model: non_blank(env::var("OPENAI_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            api_base: non_blank(env::var("OPENAI_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

// Blank values (unset or whitespace-only) fall back to defaults.
fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
