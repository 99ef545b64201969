//! Abstract extraction.
//!
//! [`extract`] runs the strategies in [`STRATEGIES`](crate::strategies::STRATEGIES)
//! order and returns the first success. When none succeeds the page is
//! classified either as a bot-check page or as an ordinary miss.
//!
//! # Example
//!
//! ```rust
//! use readabs_core::{Document, ExtractionOutcome, extract};
//!
//! let html = "<html><head><title>Just a moment... security check</title></head><body></body></html>";
//! let doc = Document::parse(html).unwrap();
//!
//! assert!(matches!(extract(&doc, None), ExtractionOutcome::Blocked { .. }));
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::parse::Document;
use crate::strategies::{Context, Found, STRATEGIES, char_len};

/// Reason attached to every [`ExtractionOutcome::Blocked`].
pub const BLOCKED_REASON: &str = "likely bot-check page";

/// Which strategy produced an abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    Metadata,
    DomSelector,
    HeadingParagraph,
    SnippetCorrelation,
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyTag::Metadata => "metadata",
            StrategyTag::DomSelector => "dom selector",
            StrategyTag::HeadingParagraph => "heading paragraph",
            StrategyTag::SnippetCorrelation => "snippet correlation",
        };
        f.write_str(name)
    }
}

/// The single result of one extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// An abstract was found. `text` is never empty.
    Found { text: String, source: StrategyTag },
    /// The page looks like a bot-check or security challenge.
    Blocked { reason: String },
    /// Nothing was found. `fallback` is the snippet hint, if one was given.
    NotFound { fallback: Option<String> },
}

impl ExtractionOutcome {
    /// The extracted abstract, if one was found.
    pub fn text(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Found { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The strategy that found the abstract, if one was found.
    pub fn source(&self) -> Option<StrategyTag> {
        match self {
            ExtractionOutcome::Found { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ExtractionOutcome::Found { .. })
    }
}

impl From<Found> for ExtractionOutcome {
    fn from(found: Found) -> Self {
        ExtractionOutcome::Found { text: found.text, source: found.source }
    }
}

/// Thresholds used by the strategies and the blocked-page check.
///
/// Lengths are in characters. "min" thresholds for containers, headings and
/// correlated paragraphs are exclusive; the metadata minimum is inclusive.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Shortest metadata value accepted as a complete abstract.
    pub min_metadata_chars: usize,
    /// A container's text must be longer than this.
    pub min_container_chars: usize,
    /// The paragraph after an "Abstract" heading must be longer than this.
    pub min_heading_chars: usize,
    /// A paragraph matched by snippet must be longer than this.
    pub min_correlated_chars: usize,
    /// How many leading snippet characters form the search key.
    pub snippet_key_chars: usize,
    /// Pages whose body text is shorter than this are treated as blocked.
    pub min_body_chars: usize,
    /// Title fragments that mark a challenge page. Compared lowercase.
    pub blocked_title_markers: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_metadata_chars: 300,
            min_container_chars: 100,
            min_heading_chars: 100,
            min_correlated_chars: 200,
            snippet_key_chars: 50,
            min_body_chars: 500,
            blocked_title_markers: ["security", "challenge", "captcha"].map(String::from).to_vec(),
        }
    }
}

/// Extracts the abstract from `doc` with the default thresholds.
///
/// `snippet` is the search engine's excerpt of the abstract. It is only used
/// to locate text on the page and is returned solely as the
/// [`ExtractionOutcome::NotFound`] fallback.
pub fn extract(doc: &Document, snippet: Option<&str>) -> ExtractionOutcome {
    extract_with_config(doc, snippet, &ExtractConfig::default())
}

/// Extracts the abstract from `doc` using custom thresholds.
pub fn extract_with_config(doc: &Document, snippet: Option<&str>, config: &ExtractConfig) -> ExtractionOutcome {
    let _span = info_span!("extract", has_snippet = snippet.is_some()).entered();
    let ctx = Context::new(doc, snippet, config);

    let found = STRATEGIES.iter().find_map(|(tag, strategy)| {
        debug!(strategy = %tag, "trying strategy");
        strategy(&ctx)
    });

    match found {
        Some(found) => {
            debug!(source = %found.source, chars = char_len(&found.text), "abstract found");
            found.into()
        }
        None => classify_miss(&ctx),
    }
}

/// Decides between `Blocked` and `NotFound` once every strategy has failed.
fn classify_miss(ctx: &Context<'_>) -> ExtractionOutcome {
    let body_chars = char_len(ctx.doc.body_text().trim());
    let title = ctx.doc.title().unwrap_or_default().to_lowercase();
    let marker = ctx
        .config
        .blocked_title_markers
        .iter()
        .find(|marker| title.contains(&marker.to_lowercase()));

    if body_chars < ctx.config.min_body_chars || marker.is_some() {
        debug!(body_chars, title = %title, marker = ?marker, "page looks like a bot check");
        return ExtractionOutcome::Blocked { reason: BLOCKED_REASON.to_string() };
    }

    let fallback = ctx.snippet.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
    debug!(has_fallback = fallback.is_some(), "no abstract found");
    ExtractionOutcome::NotFound { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filler(len: usize) -> String {
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
            .repeat(len / 57 + 1)
            .chars()
            .take(len)
            .collect()
    }

    /// A body long enough not to look like a challenge page.
    fn page(title: &str, head: &str, body: &str) -> String {
        format!(
            "<html><head><title>{title}</title>{head}</head><body>{body}<div class='footer'>{}</div></body></html>",
            filler(600)
        )
    }

    #[test]
    fn test_metadata_only_document() {
        let text = filler(320);
        let html = format!(r#"<html><head><meta name="description" content="{text}"></head></html>"#);
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, None);
        assert_eq!(
            outcome,
            ExtractionOutcome::Found { text: text.trim().to_string(), source: StrategyTag::Metadata }
        );
    }

    #[test]
    fn test_truncated_metadata_never_returned() {
        let truncated = format!("{}…", filler(400));
        let html = page("Paper", &format!(r#"<meta name="citation_abstract" content="{truncated}">"#), "");
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, None);
        assert_eq!(outcome, ExtractionOutcome::NotFound { fallback: None });
    }

    #[test]
    fn test_truncated_metadata_falls_through_to_dom() {
        let html = page(
            "Paper",
            r#"<meta property="og:description" content="A short teaser.">"#,
            &format!(r#"<section class="abstract">{}</section>"#, filler(200)),
        );
        let doc = Document::parse(&html).unwrap();

        assert_eq!(extract(&doc, None).source(), Some(StrategyTag::DomSelector));
    }

    #[test]
    fn test_earlier_selector_beats_longer_later_one() {
        let first = filler(150);
        let html = page(
            "Paper",
            "",
            &format!(r#"<div id="abstract-box">{}</div><div class="abstractSection">{first}</div>"#, filler(500)),
        );
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, None);
        assert_eq!(outcome.text(), Some(first.trim()));
        assert_eq!(outcome.source(), Some(StrategyTag::DomSelector));
    }

    #[test]
    fn test_dynamic_heading_recovered_by_snippet() {
        let abstract_text = filler(250);
        let snippet = format!("{} …", &abstract_text[..80]);
        let html = page(
            "Proceedings",
            "",
            &format!("<h4>Abstract</h4><p></p><p>{abstract_text}</p>"),
        );
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, Some(&snippet));
        assert_eq!(
            outcome,
            ExtractionOutcome::Found { text: abstract_text.trim().to_string(), source: StrategyTag::HeadingParagraph }
        );
    }

    #[test]
    fn test_snippet_correlation_as_last_resort() {
        let abstract_text = filler(260);
        let html = page("Paper", "", &format!("<p>{abstract_text}</p>"));
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, Some(&abstract_text[..70]));
        assert_eq!(outcome.source(), Some(StrategyTag::SnippetCorrelation));
        assert_eq!(outcome.text(), Some(abstract_text.trim()));
    }

    #[test]
    fn test_security_check_page_is_blocked() {
        let html = format!(
            "<html><head><title>Security Check</title></head><body><p>{}</p></body></html>",
            "x".repeat(200)
        );
        let doc = Document::parse(&html).unwrap();

        assert_eq!(
            extract(&doc, Some("a snippet")),
            ExtractionOutcome::Blocked { reason: BLOCKED_REASON.to_string() }
        );
    }

    #[rstest]
    #[case::short_body("Paper", 499, true)]
    #[case::long_body("Paper", 500, false)]
    #[case::captcha_title("Please complete the CAPTCHA", 2000, true)]
    #[case::challenge_title("Cloudflare challenge", 2000, true)]
    #[case::security_title("IEEE Xplore - Security", 2000, true)]
    #[case::security_substring("On the Security-Free Paper", 2000, true)]
    #[case::plain_title("Deep Residual Learning", 2000, false)]
    fn test_blocked_classification(#[case] title: &str, #[case] body_len: usize, #[case] blocked: bool) {
        let html = format!("<html><head><title>{title}</title></head><body><div>{}</div></body></html>", "x".repeat(body_len));
        let doc = Document::parse(&html).unwrap();

        let outcome = extract(&doc, None);
        assert_eq!(matches!(outcome, ExtractionOutcome::Blocked { .. }), blocked);
    }

    #[test]
    fn test_body_length_counts_script_text() {
        let script = format!("window.config = \"{}\";", "c".repeat(600));
        let html = format!(
            "<html><head><title>Paper</title></head><body><p>Loading</p><script>{script}</script></body></html>"
        );
        let doc = Document::parse(&html).unwrap();

        assert_eq!(extract(&doc, None), ExtractionOutcome::NotFound { fallback: None });
    }

    #[test]
    fn test_nothing_found_without_snippet() {
        let html = page("Some Paper", "", "<p>An unrelated landing page paragraph.</p>");
        let doc = Document::parse(&html).unwrap();

        assert_eq!(extract(&doc, None), ExtractionOutcome::NotFound { fallback: None });
    }

    #[test]
    fn test_nothing_found_returns_trimmed_snippet() {
        let html = page("Some Paper", "", "<p>An unrelated landing page paragraph.</p>");
        let doc = Document::parse(&html).unwrap();

        assert_eq!(
            extract(&doc, Some("  Snippet from the results page  ")),
            ExtractionOutcome::NotFound { fallback: Some("Snippet from the results page".to_string()) }
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let html = page(
            "Paper",
            r#"<meta name="description" content="short">"#,
            &format!("<h4>Abstract</h4><p></p><p>{}</p>", filler(240)),
        );
        let doc = Document::parse(&html).unwrap();
        let snippet = filler(60);

        let first = extract(&doc, Some(&snippet));
        let second = extract(&doc, Some(&snippet));
        assert_eq!(first, second);
        assert!(first.is_found());
    }

    #[test]
    fn test_custom_thresholds() {
        let html = page("Paper", r#"<meta name="description" content="A complete but brief abstract.">"#, "");
        let doc = Document::parse(&html).unwrap();
        let config = ExtractConfig { min_metadata_chars: 10, ..Default::default() };

        let outcome = extract_with_config(&doc, None, &config);
        assert_eq!(outcome.text(), Some("A complete but brief abstract."));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = ExtractionOutcome::Found { text: "abc".to_string(), source: StrategyTag::DomSelector };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "found");
        assert_eq!(json["source"], "dom_selector");

        let json = serde_json::to_value(ExtractionOutcome::NotFound { fallback: None }).unwrap();
        assert_eq!(json["status"], "not_found");
        assert!(json["fallback"].is_null());
    }
}
