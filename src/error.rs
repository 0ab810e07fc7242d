//! Error types for the reference-data layer
//!
//! These errors never escape the public fetch API: the client logs them and
//! degrades to an empty list. They surface from the transport, config and
//! session seams so those pieces stay testable on their own.

use thiserror::Error;

/// Main error type for reference-data resolution
#[derive(Error, Debug)]
pub enum RefDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup endpoint {path} returned {status}: {body}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    #[error("Failed to parse response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RefDataError>;
