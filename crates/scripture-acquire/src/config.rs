use std::path::PathBuf;
use std::time::Duration;

/// Default destination for downloaded and generated files.
pub const DEFAULT_DATA_DIR: &str = "data/raw";

/// Plain-text King James Version hosted by Project Gutenberg (ebook #10).
pub const DEFAULT_CORPUS_URL: &str = "https://www.gutenberg.org/files/10/10-0.txt";

/// Per-book REST API: `GET {base}/{book}?translation={translation}`.
pub const DEFAULT_API_BASE_URL: &str = "https://bible-api.com";

pub const DEFAULT_TRANSLATION: &str = "KJV";

/// Immutable settings for an [`Acquisition`](crate::Acquisition).
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Directory all output files are written to. Created on first write.
    pub data_dir: PathBuf,
    pub corpus_url: String,
    pub api_base_url: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves the HTTP client default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!(
                "scripture/",
                env!("CARGO_PKG_VERSION"),
                " (bible text acquisition)"
            )
            .to_string(),
            timeout: None,
        }
    }
}

impl AcquireConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_corpus_url(mut self, url: impl Into<String>) -> Self {
        self.corpus_url = url.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AcquireConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data/raw"));
        assert_eq!(config.corpus_url, DEFAULT_CORPUS_URL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.user_agent.starts_with("scripture/"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AcquireConfig::new("/tmp/out")
            .with_corpus_url("http://localhost/kjv.txt")
            .with_api_base_url("http://localhost/api")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.corpus_url, "http://localhost/kjv.txt");
        assert_eq!(config.api_base_url, "http://localhost/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
