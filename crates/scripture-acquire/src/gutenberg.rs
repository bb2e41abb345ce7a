use crate::error::{AcquireError, Result};
use crate::output::{self, CORPUS_FILE};
use crate::Acquisition;
use reqwest::StatusCode;
use std::path::PathBuf;

impl Acquisition {
    /// Download the King James Version as one plain-text file.
    ///
    /// Issues a single GET to the configured corpus URL and writes the body
    /// verbatim to `{data_dir}/kjv_bible_gutenberg.txt`. Any status other
    /// than 200 fails with [`AcquireError::RemoteFetch`] and writes nothing.
    pub async fn download_gutenberg_kjv(&self) -> Result<PathBuf> {
        let url = self.config.corpus_url.as_str();
        tracing::info!(url = %url, "Fetching KJV corpus");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AcquireError::RemoteFetch {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await?;
        tracing::debug!(bytes = text.len(), "Received corpus body");

        let path = output::write_text(&self.config.data_dir, CORPUS_FILE, &text)?;
        tracing::info!(path = %path.display(), "Downloaded KJV Bible");
        Ok(path)
    }
}
