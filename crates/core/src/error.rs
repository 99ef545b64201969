//! Error types for readabs operations.
//!
//! Extraction itself is infallible: every call to [`extract`](crate::extract())
//! ends in an [`ExtractionOutcome`](crate::ExtractionOutcome). The errors here
//! belong to the collaborators around it: fetching, reading input, parsing the
//! payload into a [`Document`](crate::Document), and serializing output.
//!
//! # Example
//!
//! ```rust
//! use readabs_core::{Document, ReadabsError};
//!
//! match Document::parse("   ") {
//!     Err(ReadabsError::EmptyDocument) => println!("nothing to parse"),
//!     Err(e) => println!("Error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the fetch, parse and presentation steps.
#[derive(Error, Debug)]
pub enum ReadabsError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status.
    ///
    /// The body of such a response is never handed to the extractor.
    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML query errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The payload was empty, so there is no document to extract from.
    ///
    /// This is distinct from an extraction that found nothing.
    #[error("Document is empty")]
    EmptyDocument,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors from the presentation layer.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ReadabsError.
pub type Result<T> = std::result::Result<T, ReadabsError>;
