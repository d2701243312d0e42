//! AI portrait generation
//!
//! One POST to the text-to-image endpoint with fixed parameters, then a
//! second GET to download the returned image URL. Nothing in this path is
//! allowed to abort the program: every failure is caught, logged, and the
//! caller keeps going.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

const MODEL: &str = "dall-e-3";
const SIZE: &str = "1024x1024";
const STYLE: &str = "vivid";
const QUALITY: &str = "standard";

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: String,
    size: &'a str,
    style: &'a str,
    quality: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

/// Blocking client for the text-to-image service.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    client: Client,
    endpoint: Url,
    api_key: String,
    output_dir: PathBuf,
}

impl ImageGenerator {
    /// Create a generator from configuration, writing into the current
    /// working directory.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.image_timeout_secs))
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.image_endpoint.clone(),
            api_key: config.image_api_key.clone(),
            output_dir: PathBuf::from("."),
        })
    }

    /// Override the directory generated images are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Generate and download a portrait for `name`.
    ///
    /// Never fails: on any error the cause is logged and `None` is
    /// returned, on success the written path is announced and returned.
    pub fn generate(&self, name: &str) -> Option<PathBuf> {
        match self.request_and_save(name) {
            Ok(path) => {
                println!("{} portrait saved to {}", "✓".green(), path.display());
                Some(path)
            }
            Err(err) => {
                tracing::warn!(character = name, error = %err, "image generation failed");
                println!("{} no portrait for {name} (see log)", "✗".yellow());
                None
            }
        }
    }

    fn request_and_save(&self, name: &str) -> Result<PathBuf> {
        let payload = GenerationRequest {
            model: MODEL,
            prompt: format!(
                "Create a character similar in appearance to {name}, \
                 original enough to pass any content filter"
            ),
            size: SIZE,
            style: STYLE,
            quality: QUALITY,
            n: 1,
        };

        let endpoint = self.endpoint.to_string();
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|source| Error::Transport {
                url: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(Error::Remote(format!(
                "image service returned {status}: {body}"
            )));
        }

        let parsed: GenerationResponse = response.json().map_err(|e| Error::Protocol {
            context: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let image = parsed
            .data
            .first()
            .ok_or_else(|| Error::schema("image response", "data[0].url"))?;
        tracing::info!(character = name, url = %image.url, "image generated");

        let bytes = self.download(&image.url)?;

        let path = self.output_dir.join(format!("{}.png", safe_file_stem(name)));
        std::fs::write(&path, &bytes).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?
            .error_for_status()
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let bytes = response.bytes().map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(bytes.to_vec())
    }
}

/// Turn a character name into a safe file stem: keep alphanumerics, spaces,
/// underscores and hyphens, trim, then replace spaces with underscores.
pub fn safe_file_stem(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testhttp::{serve, CannedResponse};

    fn generator_for(endpoint: String, output_dir: &std::path::Path) -> ImageGenerator {
        let config = Config::from_lookup(|key| match key {
            "SUPERHERO_API_TOKEN" => Some("tok".to_string()),
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "IMAGE_API_ENDPOINT" => Some(endpoint.clone()),
            _ => None,
        })
        .unwrap();
        ImageGenerator::new(&config)
            .unwrap()
            .with_output_dir(output_dir)
    }

    #[test]
    fn test_generate_downloads_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();

        let download = serve(vec![CannedResponse::bytes(b"png-bytes")]);
        let body = format!(r#"{{"data": [{{"url": "{download}/img.png"}}]}}"#);
        let generation = serve(vec![CannedResponse::json("200 OK", &body)]);

        let generator = generator_for(generation, dir.path());
        let path = generator.generate("A-Bomb").unwrap();

        assert_eq!(path.file_name().unwrap(), "A-Bomb.png");
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_non_200_returns_none_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let generation = serve(vec![CannedResponse::json(
            "500 Internal Server Error",
            r#"{"error": "overloaded"}"#,
        )]);

        let generator = generator_for(generation, dir.path());
        assert!(generator.generate("A-Bomb").is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_data_array_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let generation = serve(vec![CannedResponse::json("200 OK", r#"{"data": []}"#)]);

        let generator = generator_for(generation, dir.path());
        assert!(generator.generate("A-Bomb").is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("A-Bomb"), "A-Bomb");
        assert_eq!(safe_file_stem("Abe Sapien"), "Abe_Sapien");
        assert_eq!(safe_file_stem("  Dr. Strange?!  "), "Dr_Strange");
        assert_eq!(safe_file_stem("under_score"), "under_score");
    }
}
