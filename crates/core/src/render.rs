//! Layout-aware text rendering.
//!
//! Approximates what a browser returns for `innerText` by laying the element
//! out as plain text with `html2text`: scripts and styles are dropped, inline
//! whitespace collapses, `<pre>` keeps its spacing and block elements start
//! on a new line.

use std::io::Cursor;

use html2text::render::TrivialDecorator;
use scraper::ElementRef;
use tracing::debug;

/// Wide enough that no paragraph is ever wrapped.
const RENDER_WIDTH: usize = 10_000;

/// Renders the text of `element` the way a reader would see it, trimmed.
///
/// Tables are laid out cell by cell rather than drawn as a grid.
pub(crate) fn rendered_text(element: ElementRef<'_>) -> String {
    let html = element.html();
    let config = html2text::config::with_decorator(TrivialDecorator::new()).raw_mode(true);

    match config.string_from_read(Cursor::new(html.as_bytes()), RENDER_WIDTH) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            debug!(error = %e, "text layout failed, using raw text");
            element.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
        }
    }
}
