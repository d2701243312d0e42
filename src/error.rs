//! Error taxonomy
//!
//! One enum, one kind per failure class. Callers pattern-match on the kind
//! to decide between abort (configuration, data-set errors) and
//! skip-and-continue (per-id fetches, image generation).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required credential or endpoint is missing or invalid. Fatal.
    #[error("missing required configuration: {0}")]
    Configuration(String),

    /// Network failure, timeout, or non-2xx status.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The peer answered, but not with the JSON we expected.
    #[error("invalid response from {context}: {reason}")]
    Protocol { context: String, reason: String },

    /// The service itself reported an application-level error.
    #[error("service reported an error: {0}")]
    Remote(String),

    /// A record is missing a field we need.
    #[error("record '{record}' is missing or has an unusable field '{field}'")]
    Schema { record: String, field: String },

    /// Local file access failure.
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn schema(record: impl Into<String>, field: impl Into<String>) -> Self {
        Error::Schema {
            record: record.into(),
            field: field.into(),
        }
    }
}
