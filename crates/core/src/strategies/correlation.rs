//! Recovering the abstract by matching the search engine's snippet.
//!
//! Pages that inject the abstract with script after load still tend to ship
//! the full text somewhere in a paragraph, and the snippet is a verbatim
//! excerpt of it. The snippet's opening characters are used as a search key
//! over every paragraph.

use tracing::debug;

use super::{Context, Found, char_len};
use crate::extract::StrategyTag;

/// The case-folded search key for a snippet, or `None` for a blank snippet.
pub fn search_key(snippet: &str, key_chars: usize) -> Option<String> {
    let key: String = snippet.trim().to_lowercase().chars().take(key_chars).collect();
    if key.is_empty() { None } else { Some(key) }
}

/// The raw text of the first long paragraph containing the snippet key.
///
/// Shared by the heading strategy, which reports the hit under its own tag.
pub fn correlate(ctx: &Context<'_>) -> Option<String> {
    let snippet = ctx.snippet?;
    let key = search_key(snippet, ctx.config.snippet_key_chars)?;
    debug!(key = %key, "searching paragraphs for snippet");

    for paragraph in ctx.doc.elements_by_tag("p") {
        let text = paragraph.text();
        let text = text.trim();
        let chars = char_len(text);
        if chars > ctx.config.min_correlated_chars && text.to_lowercase().contains(&key) {
            debug!(chars, "found paragraph matching snippet");
            return Some(text.to_string());
        }
    }

    debug!("no paragraph matched the snippet");
    None
}

pub fn from_snippet(ctx: &Context<'_>) -> Option<Found> {
    correlate(ctx).map(|text| Found::new(text, StrategyTag::SnippetCorrelation))
}
