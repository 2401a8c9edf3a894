use std::path::PathBuf;

use thiserror::Error;

use crate::version::error::VersionError;

/// Failure to load or validate the release catalog. Always fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog does not match the schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Catalog has no release dates")]
    Empty,

    #[error("Invalid version key '{key}': {source}")]
    InvalidVersion {
        key: String,
        #[source]
        source: VersionError,
    },

    #[error("EOL date key '{0}' is not a bare major version")]
    InvalidEolKey(String),

    #[error("Duplicate release {0}")]
    DuplicateVersion(String),

    #[error("Invalid date '{value}' for {key}")]
    InvalidDate { key: String, value: String },

    #[error("{kind} '{title}' is tagged with unknown release {version}")]
    UnknownVersion {
        kind: &'static str,
        title: String,
        version: String,
    },

    #[error("CVE '{title}' has impact score {score} outside 0.0-10.0")]
    ImpactScoreOutOfRange { title: String, score: f64 },
}
