//! Fetch, parse and extract in one call.
//!
//! The [`Reader`] plays the part of the "Read Abstract" button: given a
//! landing page (by URL or as HTML) and the search engine's snippet, it
//! produces a [`Reading`] for the presenter.
//!
//! # Example
//!
//! ```rust
//! use readabs_core::{Reader, Reading};
//!
//! let reader = Reader::new();
//! let html = "<html><head><title>Paper</title></head><body><p>Landing page</p></body></html>";
//! let reading = reader.read_html(html, Some("snippet text")).unwrap();
//! assert!(matches!(reading, Reading::Extracted { .. }));
//! ```

use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::extract::{ExtractConfig, ExtractionOutcome, extract_with_config};
use crate::fetch::{FetchConfig, parse_url};
use crate::metadata::Metadata;
use crate::parse::Document;
use crate::Result;

#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;

/// Proceedings hosts that render abstracts from script after load.
pub const DYNAMIC_PROCEEDINGS_HOSTS: [&str; 2] = ["proceedings.neurips.cc", "papers.nips.cc"];

/// Configuration for the [`Reader`].
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// HTTP settings for URL reads.
    pub fetch: FetchConfig,
    /// Extraction thresholds.
    pub extract: ExtractConfig,
    /// Hosts that are never fetched; their snippet is shown instead.
    pub snippet_only_hosts: Vec<String>,
}

impl ReaderConfig {
    /// Creates a new builder for ReaderConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readabs_core::ReaderConfig;
    ///
    /// let config = ReaderConfig::builder().timeout(10).skip_dynamic_hosts().build();
    /// assert_eq!(config.fetch.timeout, 10);
    /// ```
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::new()
    }
}

/// Builder for ReaderConfig.
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ReaderConfig::default() }
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Replaces the extraction thresholds.
    pub fn extract_config(mut self, value: ExtractConfig) -> Self {
        self.config.extract = value;
        self
    }

    /// Sets the shortest metadata abstract that is trusted.
    pub fn min_metadata_chars(mut self, value: usize) -> Self {
        self.config.extract.min_metadata_chars = value;
        self
    }

    /// Adds a host that is answered from the snippet without fetching.
    pub fn snippet_only_host(mut self, host: impl Into<String>) -> Self {
        self.config.snippet_only_hosts.push(host.into());
        self
    }

    /// Adds every host in [`DYNAMIC_PROCEEDINGS_HOSTS`].
    pub fn skip_dynamic_hosts(mut self) -> Self {
        self.config
            .snippet_only_hosts
            .extend(DYNAMIC_PROCEEDINGS_HOSTS.iter().map(|host| host.to_string()));
        self
    }

    /// Builds the config.
    pub fn build(self) -> ReaderConfig {
        self.config
    }
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// What the reader produced for one landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    /// The page was parsed and run through extraction.
    Extracted { url: Option<String>, outcome: ExtractionOutcome, metadata: Metadata },
    /// The host is configured as snippet-only, so nothing was fetched.
    Skipped { url: String, host: String, snippet: Option<String> },
}

impl Reading {
    /// The extraction outcome, unless the page was skipped.
    pub fn outcome(&self) -> Option<&ExtractionOutcome> {
        match self {
            Reading::Extracted { outcome, .. } => Some(outcome),
            Reading::Skipped { .. } => None,
        }
    }
}

/// Main entry point for reading abstracts.
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Creates a new Reader with default settings.
    pub fn new() -> Self {
        Self { config: ReaderConfig::default() }
    }

    /// Creates a new Reader with a custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Parses `html` and extracts its abstract.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabsError::EmptyDocument`](crate::ReadabsError::EmptyDocument)
    /// when `html` is blank. A page without an abstract is not an error.
    pub fn read_html(&self, html: &str, snippet: Option<&str>) -> Result<Reading> {
        self.read_document(html, None, snippet)
    }

    /// Like [`Reader::read_html`], recording the URL the page came from.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabsError::InvalidUrl`](crate::ReadabsError::InvalidUrl)
    /// if the URL is invalid.
    pub fn read_html_with_url(&self, html: &str, url: &str, snippet: Option<&str>) -> Result<Reading> {
        let url = parse_url(url)?;
        self.read_document(html, Some(&url), snippet)
    }

    /// Fetches the landing page at `url` and extracts its abstract.
    ///
    /// Fetch failures are returned as errors before extraction runs.
    #[cfg(feature = "fetch")]
    pub async fn read_url(&self, url: &str, snippet: Option<&str>) -> Result<Reading> {
        let parsed = parse_url(url)?;

        if let Some(host) = self.snippet_only_host(&parsed) {
            info!(host, "host renders abstracts dynamically, using snippet");
            return Ok(Reading::Skipped {
                url: parsed.to_string(),
                host: host.to_string(),
                snippet: snippet.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
            });
        }

        let html = fetch_url(parsed.as_str(), &self.config.fetch).await?;
        self.read_document(&html, Some(&parsed), snippet)
    }

    /// The configured snippet-only host `url` belongs to, if any.
    pub fn snippet_only_host(&self, url: &Url) -> Option<&str> {
        let host = url.host_str()?.to_lowercase();
        self.config
            .snippet_only_hosts
            .iter()
            .map(String::as_str)
            .find(|candidate| {
                let candidate = candidate.to_lowercase();
                host == candidate || host.ends_with(&format!(".{}", candidate))
            })
    }

    fn read_document(&self, html: &str, url: Option<&Url>, snippet: Option<&str>) -> Result<Reading> {
        let doc = Document::parse(html)?;
        debug!(title = ?doc.title(), "parsed landing page");

        let outcome = extract_with_config(&doc, snippet, &self.config.extract);
        info!(found = outcome.is_found(), source = ?outcome.source(), "extraction finished");

        Ok(Reading::Extracted { url: url.map(Url::to_string), outcome, metadata: doc.extract_metadata() })
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for one-liner extraction with defaults.
pub fn read_html(html: &str, snippet: Option<&str>) -> Result<Reading> {
    Reader::new().read_html(html, snippet)
}

/// Convenience function to fetch a landing page and extract its abstract.
#[cfg(feature = "fetch")]
pub async fn fetch_and_read(url: &str, snippet: Option<&str>) -> Result<Reading> {
    Reader::new().read_url(url, snippet).await
}
