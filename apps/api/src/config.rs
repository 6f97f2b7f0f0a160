use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional: without a key the advice endpoint returns an error message.
    pub openai_api_key: Option<String>,
    pub advice_api_url: String,
    pub advice_model: String,
    pub advice_timeout: Duration,
    pub session_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            openai_api_key: var("OPENAI_API_KEY"),
            advice_api_url: var("ADVICE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            advice_model: var("ADVICE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            advice_timeout: Duration::from_secs(parse_or::<u64>(
                var("ADVICE_TIMEOUT_SECS"),
                30,
                "ADVICE_TIMEOUT_SECS must be a whole number of seconds",
            )?),
            session_ttl: Duration::from_secs(
                parse_or::<u64>(
                    var("SESSION_TTL_MINUTES"),
                    60,
                    "SESSION_TTL_MINUTES must be a whole number of minutes",
                )?
                .checked_mul(60)
                .context("SESSION_TTL_MINUTES is too large")?,
            ),
            port: parse_or(var("PORT"), 8080, "PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_key: self.openai_api_key.clone(),
            api_url: self.advice_api_url.clone(),
            model: self.advice_model.clone(),
            timeout: self.advice_timeout,
        }
    }
}

fn parse_or<T>(value: Option<String>, default: T, msg: &'static str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v.trim().parse::<T>().context(msg),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.advice_model, DEFAULT_MODEL);
        assert_eq!(config.advice_timeout, Duration::from_secs(30));
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_read() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "9000"),
            ("ADVICE_TIMEOUT_SECS", "5"),
            ("SESSION_TTL_MINUTES", "15"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.llm_settings().api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm_settings().timeout, Duration::from_secs(5));
        assert_eq!(config.session_ttl, Duration::from_secs(900));
    }

    #[test]
    fn test_oversized_session_ttl_fails() {
        let err = config_from(&[("SESSION_TTL_MINUTES", "18446744073709551615")]).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_MINUTES is too large"));
    }

    #[test]
    fn test_malformed_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
