use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
///
/// `GROQ_API_KEY` is not required here: a missing key surfaces as an
/// authentication failure on the first extraction.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            groq_api_key: lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()),
            groq_api_url: lookup("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.groq_api_url, DEFAULT_API_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_API_URL", "http://localhost:9000/v1/chat/completions"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.groq_api_url, "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = config_from(&[("GROQ_API_KEY", "  ")]).unwrap();
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
