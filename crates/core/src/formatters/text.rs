use crate::extract::ExtractionOutcome;
use crate::metadata::Metadata;
use crate::reader::Reading;

/// Shown while the landing page is being fetched.
pub const LOADING_MESSAGE: &str = "Loading abstract...";

/// Shown for [`ExtractionOutcome::Blocked`].
pub const BLOCKED_MESSAGE: &str = "Could not fetch the abstract. The site might be blocking the request \
    (Security Check/CAPTCHA).\n\nPlease try clicking the link to open the paper, pass any security checks, \
    and then try again.";

/// Lead line for [`ExtractionOutcome::NotFound`].
pub const NOT_FOUND_LEAD: &str = "Could not automatically extract the full abstract from the page. Here is the snippet:";

/// Stands in for a missing snippet.
pub const NO_SNIPPET: &str = "No abstract available.";

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include citation metadata header
    pub include_header: bool,

    /// Name the strategy that found the abstract
    pub include_source: bool,
}

/// Plain text formatter for presenting readings
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, reading: &Reading) -> String {
        convert_to_text(reading, &self.config)
    }
}

/// The fixed message or abstract text for an outcome.
pub fn render_outcome(outcome: &ExtractionOutcome) -> String {
    match outcome {
        ExtractionOutcome::Found { text, .. } => text.clone(),
        ExtractionOutcome::Blocked { .. } => BLOCKED_MESSAGE.to_string(),
        ExtractionOutcome::NotFound { fallback } => {
            format!("{}\n\n{}", NOT_FOUND_LEAD, fallback.as_deref().unwrap_or(NO_SNIPPET))
        }
    }
}

/// The notice for a host whose abstracts cannot be fetched.
pub fn render_skipped(host: &str, snippet: Option<&str>) -> String {
    format!(
        "Abstracts on {} are loaded dynamically and cannot be extracted automatically.\n\n\
         Here is the snippet from the search results:\n\n{}\n\n\
         Click the paper link to view the full abstract.",
        host,
        snippet.unwrap_or(NO_SNIPPET)
    )
}

/// Convert a reading to plain text with specified configuration
pub fn convert_to_text(reading: &Reading, config: &TextConfig) -> String {
    let mut output = String::new();

    let body = match reading {
        Reading::Extracted { outcome, metadata, .. } => {
            if config.include_header {
                let header = generate_header(metadata);
                if !header.is_empty() {
                    output.push_str(&header);
                    output.push('\n');
                }
            }

            let mut body = render_outcome(outcome);
            if config.include_source
                && let Some(source) = outcome.source()
            {
                body.push_str(&format!("\n\n(found via {})", source));
            }
            body
        }
        Reading::Skipped { host, snippet, .. } => render_skipped(host, snippet.as_deref()),
    };

    let body = if config.line_width > 0 { wrap_text(&body, config.line_width) } else { body };
    output.push_str(&body);

    output.trim().to_string()
}

/// Generate a header from citation metadata
fn generate_header(metadata: &Metadata) -> String {
    let mut header = String::new();

    if let Some(title) = &metadata.title {
        header.push_str(title);
        header.push('\n');
        header.push_str(&"=".repeat(title.chars().count()));
        header.push('\n');
    }

    let mut meta_parts = Vec::new();

    if !metadata.authors.is_empty() {
        meta_parts.push(format!("By: {}", metadata.authors.join("; ")));
    }

    if let Some(venue) = &metadata.venue {
        meta_parts.push(format!("In: {}", venue));
    }

    if let Some(date) = &metadata.published {
        meta_parts.push(format!("Date: {}", date));
    }

    if let Some(doi) = &metadata.doi {
        meta_parts.push(format!("DOI: {}", doi));
    }

    if !meta_parts.is_empty() {
        header.push_str(&meta_parts.join(" | "));
        header.push('\n');
    }

    header
}

/// Wrap text to specified width, keeping paragraph breaks
fn wrap_text(text: &str, width: usize) -> String {
    text.split("\n\n")
        .map(|paragraph| {
            paragraph
                .lines()
                .map(|line| {
                    let words: Vec<&str> = line.split_whitespace().collect();
                    wrap_words(&words, width)
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
