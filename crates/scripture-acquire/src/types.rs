use crate::error::BookFetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// A book that was requested but left out of the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedBook {
    pub book: String,
    /// Human-readable failure, e.g. "HTTP 404 Not Found".
    pub reason: String,
}

/// Outcome of a per-book API download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDownload {
    /// Path of the written `bible_{translation}_api.json`.
    pub path: PathBuf,
    pub translation: String,
    /// Number of book documents written to `path`.
    pub fetched: usize,
    /// Books that failed, in request order.
    pub skipped: Vec<SkippedBook>,
}

impl BookDownload {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Accumulator for the per-book loop: successful documents in request order,
/// plus every book that failed and why.
#[derive(Debug, Default)]
pub struct BookHarvest {
    pub documents: Vec<Value>,
    pub skipped: Vec<SkippedBook>,
}

impl BookHarvest {
    /// Fold one book's result into the harvest.
    pub fn absorb(mut self, book: &str, result: Result<Value, BookFetchError>) -> Self {
        match result {
            Ok(document) => {
                tracing::info!(book = %book, "Downloaded {book}");
                self.documents.push(document);
            }
            Err(err) => {
                tracing::warn!(book = %book, error = %err, "Failed to download {book}");
                self.skipped.push(SkippedBook {
                    book: book.to_string(),
                    reason: err.to_string(),
                });
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_absorb_keeps_order_and_records_failures() {
        let harvest = BookHarvest::default()
            .absorb("Genesis", Ok(json!({"reference": "Genesis"})))
            .absorb("Exodus", Err(BookFetchError::Status(StatusCode::NOT_FOUND)))
            .absorb("Leviticus", Ok(json!({"reference": "Leviticus"})));

        assert_eq!(
            harvest.documents,
            vec![json!({"reference": "Genesis"}), json!({"reference": "Leviticus"})]
        );
        assert_eq!(
            harvest.skipped,
            vec![SkippedBook {
                book: "Exodus".into(),
                reason: "HTTP 404 Not Found".into(),
            }]
        );
    }

    #[test]
    fn test_empty_harvest() {
        let harvest = BookHarvest::default();
        assert!(harvest.documents.is_empty());
        assert!(harvest.skipped.is_empty());
    }
}
