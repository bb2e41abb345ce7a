//! Bible text acquisition.
//!
//! An [`Acquisition`] writes into a single data directory and offers three
//! independent operations:
//! - [`Acquisition::download_gutenberg_kjv`]: whole KJV as plain text
//! - [`Acquisition::download_books`]: one bible-api.com document per book
//! - [`Acquisition::create_sample_dataset`]: five fixed verses, no network

pub mod bible_api;
pub mod config;
pub mod error;
pub mod gutenberg;
pub mod output;
pub mod sample;
pub mod types;

pub use config::AcquireConfig;
pub use error::{AcquireError, BookFetchError, Result};
pub use types::{BookDownload, SkippedBook};

use reqwest::Url;
use std::path::Path;

/// Acquisition service bound to one configuration and HTTP client.
#[derive(Debug, Clone)]
pub struct Acquisition {
    config: AcquireConfig,
    api_base: Url,
    client: reqwest::Client,
}

impl Acquisition {
    pub fn new(config: AcquireConfig) -> Result<Self> {
        let api_base = parse_base_url(&config.api_base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            api_base,
            client,
        })
    }

    pub fn config(&self) -> &AcquireConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }
}

/// Parse a base URL that book names can be appended to as path segments.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| AcquireError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(AcquireError::InvalidUrl {
            url: raw.to_string(),
            reason: "cannot be used as a base URL".to_string(),
        });
    }
    Ok(url)
}
