use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an acquisition operation.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to download {url}: HTTP {status}")]
    RemoteFetch { url: String, status: StatusCode },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single book was skipped during a per-book download.
///
/// These never abort the download; they are collected into the report.
#[derive(Debug, Error)]
pub enum BookFetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type Result<T, E = AcquireError> = std::result::Result<T, E>;
