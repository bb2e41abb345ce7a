use crate::error::{BookFetchError, Result};
use crate::output;
use crate::types::{BookDownload, BookHarvest};
use crate::Acquisition;
use reqwest::{StatusCode, Url};
use serde_json::Value;

impl Acquisition {
    /// Download each book of `books` (default: the full canon) from the
    /// per-book API and save them as one JSON array.
    ///
    /// Books are fetched one at a time in the given order. A book that fails
    /// is logged, listed in [`BookDownload::skipped`], and left out of the
    /// file; the remaining books are still fetched. Only the final write can
    /// fail the whole call.
    pub async fn download_books(
        &self,
        translation: &str,
        books: Option<&[String]>,
    ) -> Result<BookDownload> {
        let canon;
        let books = match books {
            Some(books) => books,
            None => {
                canon = scripture_model::canon();
                canon.as_slice()
            }
        };
        tracing::info!(translation = %translation, books = books.len(), "Fetching books");

        let mut harvest = BookHarvest::default();
        for book in books {
            let result = self.fetch_book(book, translation).await;
            harvest = harvest.absorb(book, result);
        }

        let path = output::write_json(
            &self.config.data_dir,
            &output::api_file_name(translation),
            &harvest.documents,
        )?;
        tracing::info!(
            path = %path.display(),
            fetched = harvest.documents.len(),
            skipped = harvest.skipped.len(),
            "Saved Bible data"
        );

        Ok(BookDownload {
            path,
            translation: translation.to_string(),
            fetched: harvest.documents.len(),
            skipped: harvest.skipped,
        })
    }

    async fn fetch_book(&self, book: &str, translation: &str) -> Result<Value, BookFetchError> {
        let url = book_url(&self.api_base, book, translation);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(BookFetchError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BookFetchError::Status(status));
        }

        response.json::<Value>().await.map_err(BookFetchError::Decode)
    }
}

/// Build `{base}/{book}?translation={translation}` with the book name
/// percent-encoded as a single path segment.
fn book_url(base: &Url, book: &str, translation: &str) -> Url {
    let mut url = base.clone();
    // `base` is checked by `parse_base_url`, so it always has path segments.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(book);
    }
    url.query_pairs_mut().append_pair("translation", translation);
    url
}
