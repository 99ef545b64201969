//! Abstracts published in head-level `<meta>` tags.

use tracing::debug;

use super::{Context, Found, char_len};
use crate::extract::StrategyTag;
use crate::metadata::MetaKey;

/// Meta fields that may carry the abstract, highest priority first.
pub const ABSTRACT_META_FIELDS: [(MetaKey, &str); 4] = [
    (MetaKey::Name, "citation_abstract"),
    (MetaKey::Name, "DC.Description"),
    (MetaKey::Name, "description"),
    (MetaKey::Property, "og:description"),
];

/// Checks whether a metadata value looks cut short by the publisher.
///
/// A value ending in an ellipsis, or shorter than `min_chars` once trimmed,
/// is treated as incomplete even if it is a genuinely short abstract.
pub fn is_truncated(value: &str, min_chars: usize) -> bool {
    let value = value.trim();
    value.ends_with("...") || value.ends_with('…') || char_len(value) < min_chars
}

/// The first present abstract meta field, if it passes the truncation filter.
///
/// Only the first field present is considered. A truncated
/// `citation_abstract` does not fall back to `description`.
pub fn from_meta_tags(ctx: &Context<'_>) -> Option<Found> {
    log_abstract_like_meta(ctx);

    let (field, element) = ABSTRACT_META_FIELDS
        .iter()
        .find_map(|(key, field)| ctx.doc.meta_element(*key, field).map(|el| (*field, el)))?;

    let content = element.attr("content").unwrap_or_default().trim();
    debug!(field, chars = char_len(content), "found abstract meta tag");

    if content.is_empty() {
        return None;
    }

    if is_truncated(content, ctx.config.min_metadata_chars) {
        debug!(field, "meta abstract looks truncated or short, searching the page instead");
        return None;
    }

    Some(Found::new(content, StrategyTag::Metadata))
}

fn log_abstract_like_meta(ctx: &Context<'_>) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let metas = ctx.doc.elements_by_tag("meta");
    debug!(count = metas.len(), "inspecting meta tags");
    for meta in metas {
        let content = meta.attr("content").unwrap_or_default();
        if let Some(name) = meta.attr("name")
            && name.contains("abstract")
        {
            debug!(name, content, "meta name match");
        }
        if let Some(property) = meta.attr("property")
            && property.contains("description")
        {
            debug!(property, content, "meta property match");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, ExtractConfig};
    use rstest::rstest;

    fn long_text(len: usize) -> String {
        "a".repeat(len)
    }

    fn run(html: &str) -> Option<Found> {
        let doc = Document::parse(html).unwrap();
        let config = ExtractConfig::default();
        from_meta_tags(&Context::new(&doc, None, &config))
    }

    #[rstest]
    #[case::long_enough(long_text(300), false)]
    #[case::one_short(long_text(299), true)]
    #[case::ascii_ellipsis(format!("{}...", long_text(400)), true)]
    #[case::unicode_ellipsis(format!("{}…", long_text(400)), true)]
    #[case::trailing_space_ignored(format!("{}…   ", long_text(400)), true)]
    #[case::padding_not_counted(format!("   {}   ", long_text(299)), true)]
    fn test_truncation_filter(#[case] value: String, #[case] truncated: bool) {
        assert_eq!(is_truncated(&value, 300), truncated);
    }

    #[test]
    fn test_accepts_long_citation_abstract() {
        let abstract_text = long_text(320);
        let html = format!(r#"<html><head><meta name="citation_abstract" content="  {abstract_text}  "></head></html>"#);

        let found = run(&html).unwrap();
        assert_eq!(found.text, abstract_text);
        assert_eq!(found.source, StrategyTag::Metadata);
    }

    #[test]
    fn test_priority_order() {
        let html = format!(
            r#"<html><head>
                <meta property="og:description" content="og {og}">
                <meta name="DC.Description" content="dc {dc}">
            </head></html>"#,
            og = long_text(300),
            dc = long_text(300)
        );

        let found = run(&html).unwrap();
        assert!(found.text.starts_with("dc "));
    }

    #[test]
    fn test_truncated_first_field_does_not_fall_back() {
        let html = format!(
            r#"<html><head>
                <meta name="citation_abstract" content="Short and cut…">
                <meta name="description" content="{}">
            </head></html>"#,
            long_text(500)
        );

        assert!(run(&html).is_none());
    }

    #[test]
    fn test_missing_content_attribute() {
        assert!(run(r#"<html><head><meta name="citation_abstract"></head></html>"#).is_none());
    }

    #[test]
    fn test_no_meta_tags() {
        assert!(run("<html><body><p>Nothing here</p></body></html>").is_none());
    }
}
