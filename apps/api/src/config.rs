use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a request body, uploads included.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL.to_string())?,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE.to_string())?,
            gemini_timeout_secs: env_or("GEMINI_TIMEOUT_SECS", 120)?,
            port: env_or("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info".to_string())?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 16 * 1024 * 1024)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let port: u16 = env_or("COMPASS_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_or_parses_set_value() {
        std::env::set_var("COMPASS_TEST_TIMEOUT", " 30 ");
        let secs: u64 = env_or("COMPASS_TEST_TIMEOUT", 120).unwrap();
        assert_eq!(secs, 30);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("COMPASS_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = env_or("COMPASS_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_require_env_reports_key() {
        let err = require_env("COMPASS_TEST_MISSING_KEY").unwrap_err();
        assert!(err.to_string().contains("COMPASS_TEST_MISSING_KEY"));
    }
}
