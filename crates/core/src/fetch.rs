//! Landing page fetching from URLs, files, and stdin.
//!
//! Publishers block obvious bots, so URL fetches send the same header set a
//! browser navigation would.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use tracing::debug;
use url::Url;

use crate::{ReadabsError, Result};

/// Default browser-like User-Agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0 Safari/537.36";

/// `Accept` header of a top-level browser navigation.
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";

/// HTTP client configuration for fetching landing pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Parses and validates a landing page URL.
///
/// Only `http` and `https` URLs can be fetched.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ReadabsError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ReadabsError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http:// or https://",
            parsed.scheme()
        )));
    }

    Ok(parsed)
}

/// Fetches HTML content from a URL.
///
/// Follows redirects and respects the configured timeout. A response with a
/// non-success status is an error, so its body never reaches extraction.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ReadabsError::HttpError)?;

    debug!(url = %parsed_url, "fetching landing page");

    let response = client
        .get(parsed_url.clone())
        .header("User-Agent", &config.user_agent)
        .header("Accept", ACCEPT_HTML)
        .header("Accept-Language", "en-US,en;q=0.9")
        .header("Upgrade-Insecure-Requests", "1")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ReadabsError::Timeout { timeout: config.timeout }
            } else {
                ReadabsError::HttpError(e)
            }
        })?;

    let status = response.status();
    debug!(status = status.as_u16(), "fetch response");

    if !status.is_success() {
        return Err(ReadabsError::HttpStatus { status: status.as_u16(), url: parsed_url.to_string() });
    }

    let content = response.text().await?;
    debug!(bytes = content.len(), "fetched landing page");

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ReadabsError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(ReadabsError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_parse_url_requires_http() {
        assert!(parse_url("https://dl.acm.org/doi/10.1145/3292500.3330701").is_ok());
        assert!(parse_url("http://example.com").is_ok());
        assert!(matches!(parse_url("example.com"), Err(ReadabsError::InvalidUrl(_))));
        assert!(matches!(parse_url("ftp://example.com/paper"), Err(ReadabsError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[tokio::test]
    async fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = fetch_url("not-a-url", &config).await;

        assert!(matches!(result, Err(ReadabsError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(ReadabsError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><body>hi</body></html>").unwrap();

        let content = fetch_file(file.path().to_str().unwrap()).unwrap();
        assert!(content.contains("hi"));
    }
}
