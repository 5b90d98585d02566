use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::personas::ParseOptions;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of persona training documents (`*.md`).
    pub personas_dir: PathBuf,
    /// Object store for boards. `None` keeps boards in memory (local dev only).
    pub s3: Option<S3Config>,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub parse_options: ParseOptions,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl S3Config {
    /// Present only when `S3_BUCKET` is set; the rest are then required.
    fn from_env() -> Result<Option<Self>> {
        let Ok(bucket) = std::env::var("S3_BUCKET") else {
            return Ok(None);
        };
        Ok(Some(S3Config {
            bucket,
            endpoint: require_env("S3_ENDPOINT")?,
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
        }))
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ParseOptions::default();

        Ok(Config {
            personas_dir: std::env::var("PERSONAS_DIR")
                .unwrap_or_else(|_| "./training/personas".to_string())
                .into(),
            s3: S3Config::from_env()?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            parse_options: ParseOptions {
                voc_primary_limit: optional_usize("VOC_PRIMARY_LIMIT", defaults.voc_primary_limit)?,
                voc_gold_limit: optional_usize("VOC_GOLD_LIMIT", defaults.voc_gold_limit)?,
                voc_max_chars: optional_usize("VOC_MAX_CHARS", defaults.voc_max_chars)?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_usize(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => parse_usize(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usize_accepts_padding() {
        assert_eq!(parse_usize("VOC_MAX_CHARS", " 150 ").unwrap(), 150);
    }

    #[test]
    fn test_parse_usize_rejects_garbage() {
        let err = parse_usize("VOC_GOLD_LIMIT", "lots").unwrap_err();
        assert!(err.to_string().contains("VOC_GOLD_LIMIT"));
    }
}
