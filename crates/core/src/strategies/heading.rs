//! The `<h4>Abstract</h4><p>...</p>` layout used by proceedings sites.
//!
//! These pages often fill the paragraph from script, so the fetched markup
//! may hold an empty shell. When it does, the heading still tells us the page
//! has an abstract and snippet correlation is used to recover the text.

use tracing::debug;

use super::{Context, Found, char_len, correlation};
use crate::extract::StrategyTag;
use crate::parse::Element;

const HEADING_LABEL: &str = "abstract";

pub fn from_heading_pattern(ctx: &Context<'_>) -> Option<Found> {
    let headings = ctx.doc.elements_by_tag("h4");
    debug!(count = headings.len(), "scanning h4 headings");

    for heading in headings {
        let label = heading.rendered_text().trim().to_lowercase();
        if label != HEADING_LABEL {
            continue;
        }

        let Some(paragraph) = heading.next_element_sibling().filter(|el| el.is("p")) else {
            debug!("abstract heading is not followed by a paragraph");
            continue;
        };

        let text = paragraph_text(&paragraph);
        let chars = char_len(&text);
        debug!(chars, "abstract heading paragraph");

        if chars > ctx.config.min_heading_chars {
            return Some(Found::new(text, StrategyTag::HeadingParagraph));
        }

        debug!("abstract paragraph is near-empty, correlating with snippet");
        if let Some(text) = correlation::correlate(ctx) {
            return Some(Found::new(text, StrategyTag::HeadingParagraph));
        }
    }

    None
}

/// Text of the paragraph after the heading, trimmed.
///
/// Prefers a nested paragraph, then the paragraph's own text, then the
/// joined text of its child elements.
fn paragraph_text(paragraph: &Element<'_>) -> String {
    let text = match paragraph.first_descendant("p") {
        Some(inner) => inner.text(),
        None => paragraph.text(),
    };
    let text = text.trim();

    if text.is_empty() {
        let children = paragraph.child_elements();
        if !children.is_empty() {
            let joined = children.iter().map(Element::text).collect::<Vec<_>>().join(" ");
            return joined.trim().to_string();
        }
    }

    text.to_string()
}
