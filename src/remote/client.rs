//! Blocking client for the superhero lookup service
//!
//! One GET per character: `{base_url}/{token}/{id}`. The service reports
//! application-level failures in-band via `"response": "error"`, so a 200
//! body still has to be inspected before it counts as a character.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::Config;
use crate::core::character::Character;
use crate::error::{Error, Result};

/// Blocking client for character lookups by numeric id.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
    token: String,
}

impl LookupClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    /// `Error::Configuration` if the token is empty or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        if config.api_token.is_empty() {
            return Err(Error::Configuration("SUPERHERO_API_TOKEN".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Fetch one character by id.
    ///
    /// # Errors
    /// - `Error::Transport` on network failure, timeout, or non-2xx status.
    /// - `Error::Protocol` if the body is not JSON in the expected shape.
    /// - `Error::Remote` if the service answered `"response": "error"`.
    pub fn fetch(&self, id: u32) -> Result<Character> {
        let url = format!("{}/{}/{}", self.base_url, self.token, id);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let response = response
            .error_for_status()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let text = response.text().map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

        let body: Value = serde_json::from_str(&text).map_err(|_| Error::Protocol {
            context: url.clone(),
            reason: "response body is not valid JSON".to_string(),
        })?;

        if body.get("response").and_then(Value::as_str) == Some("error") {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(Error::Remote(message.to_string()));
        }

        serde_json::from_value(body).map_err(|e| Error::Protocol {
            context: url,
            reason: e.to_string(),
        })
    }

    /// Fetch a batch of characters, one request per id.
    ///
    /// Partial success is allowed: a failing id is logged as a warning and
    /// omitted from the result, and the batch continues.
    pub fn fetch_many(&self, ids: &[u32]) -> Vec<Character> {
        let mut characters = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.fetch(id) {
                Ok(character) => characters.push(character),
                Err(err) => tracing::warn!(id, error = %err, "skipping character"),
            }
        }
        characters
    }
}
