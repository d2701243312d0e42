//! Configuration module
//!
//! All required values are read from the environment once at startup and
//! validated eagerly. Components receive the resulting struct at
//! construction; nothing reads the environment ad hoc.

use url::Url;

use crate::error::{Error, Result};

/// Default base URL of the superhero lookup service.
pub const DEFAULT_BASE_URL: &str = "https://www.superheroapi.com/api.php";

/// Timeout for lookup calls, in seconds.
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Timeout for image generation and download, in seconds.
pub const IMAGE_TIMEOUT_SECS: u64 = 60;

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token for the superhero lookup service (path component of the URL).
    pub api_token: String,

    /// Base URL of the lookup service.
    pub base_url: String,

    /// Key for the text-to-image service (Bearer header).
    pub image_api_key: String,

    /// Endpoint of the text-to-image service.
    pub image_endpoint: Url,

    /// Timeout for lookup calls, in seconds.
    pub lookup_timeout_secs: u64,

    /// Timeout for image generation and download, in seconds.
    pub image_timeout_secs: u64,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// # Errors
    /// Returns `Error::Configuration` naming the first missing or invalid
    /// variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (testable seam).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = required(&lookup, "SUPERHERO_API_TOKEN")?;
        let image_api_key = required(&lookup, "OPENAI_API_KEY")?;

        let endpoint_raw = required(&lookup, "IMAGE_API_ENDPOINT")?;
        let image_endpoint = Url::parse(&endpoint_raw).map_err(|e| {
            Error::Configuration(format!("IMAGE_API_ENDPOINT is not a valid URL: {e}"))
        })?;

        let base_url = lookup("HERO_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            image_api_key,
            image_endpoint,
            lookup_timeout_secs: LOOKUP_TIMEOUT_SECS,
            image_timeout_secs: IMAGE_TIMEOUT_SECS,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Configuration(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_full_config_loads() {
        let config = Config::from_lookup(env(&[
            ("SUPERHERO_API_TOKEN", "tok123"),
            ("OPENAI_API_KEY", "sk-abc"),
            ("IMAGE_API_ENDPOINT", "https://images.example.com/v1/generations"),
        ]))
        .unwrap();

        assert_eq!(config.api_token, "tok123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.image_endpoint.host_str(), Some("images.example.com"));
        assert_eq!(config.lookup_timeout_secs, 10);
        assert_eq!(config.image_timeout_secs, 60);
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        let err = Config::from_lookup(env(&[
            ("OPENAI_API_KEY", "sk-abc"),
            ("IMAGE_API_ENDPOINT", "https://images.example.com"),
        ]))
        .unwrap_err();

        match err {
            Error::Configuration(key) => assert_eq!(key, "SUPERHERO_API_TOKEN"),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(env(&[
            ("SUPERHERO_API_TOKEN", "tok"),
            ("OPENAI_API_KEY", "   "),
            ("IMAGE_API_ENDPOINT", "https://images.example.com"),
        ]))
        .unwrap_err();

        match err {
            Error::Configuration(key) => assert_eq!(key, "OPENAI_API_KEY"),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_endpoint_url_rejected() {
        let err = Config::from_lookup(env(&[
            ("SUPERHERO_API_TOKEN", "tok"),
            ("OPENAI_API_KEY", "sk-abc"),
            ("IMAGE_API_ENDPOINT", "not a url"),
        ]))
        .unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = Config::from_lookup(env(&[
            ("SUPERHERO_API_TOKEN", "tok"),
            ("OPENAI_API_KEY", "sk-abc"),
            ("IMAGE_API_ENDPOINT", "https://images.example.com"),
            ("HERO_API_BASE_URL", "http://localhost:9000/api/"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/api");
    }
}
