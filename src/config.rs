use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one invocation of the match endpoint.
///
/// A missing credential is kept as `None`; the handler reports it as a 500 response.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read `GROQ_*` variables. Blank values fall back to the defaults.
    pub fn from_env() -> Self {
        let api_key = non_blank_var("GROQ_API_KEY").map(SecretString::new);
        let base_url = non_blank_var("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_blank_var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = env::var("GROQ_TEMPERATURE")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let timeout_secs = env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            model,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into())),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_key() {
        let config = AppConfig::with_api_key("gsk_super_secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("gsk_super_secret"));
    }

    #[test]
    fn default_targets_groq() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_base_url_falls_back_to_groq() {
        env::set_var("GROQ_BASE_URL", "   ");
        let config = AppConfig::from_env();
        env::remove_var("GROQ_BASE_URL");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
