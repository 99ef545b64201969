//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types the extractor
//! works against. A document is parsed once and never mutated; every query
//! borrows from it.
//!
//! # Example
//!
//! ```rust
//! use readabs_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>A Paper</title></head>
//!         <body>
//!             <div class="Abstract-Body">We study things.</div>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("A Paper".to_string()));
//! let containers = doc.elements_with_attr_containing("div", "class", "abstract");
//! assert_eq!(containers.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::render;
use crate::{ReadabsError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps a fetched page and provides the queries the extraction
/// strategies need: CSS selectors, tag lookups, case-insensitive attribute
/// substring matches, and the page title and body text.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// The HTML parser is forgiving, so malformed markup still yields a
    /// document. Only an empty or whitespace-only payload is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabsError::EmptyDocument`] when there is nothing to parse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readabs_core::Document;
    ///
    /// let html = "<html><body><h4>Abstract</h4><p></p></body></html>";
    /// let doc = Document::parse(html).unwrap();
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(ReadabsError::EmptyDocument);
        }

        Ok(Self { html: Html::parse_document(html) })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabsError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readabs_core::Document;
    ///
    /// let html = r#"<p class="abstract">First</p><p class="abstract">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.abstract").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(Element::new).collect())
    }

    /// Selects the first element in document order matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabsError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(Element::new))
    }

    /// Gets every element with the given tag name, in document order.
    pub fn elements_by_tag(&'_ self, tag: &str) -> Vec<Element<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(Element::new)
            .collect()
    }

    /// Gets every `tag` element whose `attr` value contains `needle`,
    /// ignoring case.
    ///
    /// This is the explicit form of a `tag[attr*="needle" i]` selector.
    pub fn elements_with_attr_containing(&'_ self, tag: &str, attr: &str, needle: &str) -> Vec<Element<'_>> {
        self.elements_by_tag(tag)
            .into_iter()
            .filter(|el| el.attr_contains_ignore_case(attr, needle))
            .collect()
    }

    /// Gets the title of the document.
    ///
    /// Returns the text of the first `<title>` element with whitespace
    /// collapsed, or `None` when the page has no title.
    pub fn title(&self) -> Option<String> {
        let title = self.elements_by_tag("title").into_iter().next()?;
        Some(title.text().split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Gets the `<body>` element.
    pub fn body(&'_ self) -> Option<Element<'_>> {
        self.elements_by_tag("body").into_iter().next()
    }

    /// Gets the raw text of the page body, as `textContent` would.
    ///
    /// Script and style text is included, since the page is never run.
    /// Falls back to the whole document when the page has no body.
    pub fn body_text(&self) -> String {
        match self.body() {
            Some(body) => body.text(),
            None => self.html.root_element().text().collect(),
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ReadabsError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
///
/// Element exposes the two text views the strategies rely on: raw descendant
/// text ([`Element::text`]) and rendered text ([`Element::rendered_text`]).
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the raw text content of this element.
    ///
    /// Returns the concatenation of all descendant text nodes, including
    /// those inside scripts and hidden elements.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text of this element as a reader would see it.
    pub fn rendered_text(&self) -> String {
        render::rendered_text(self.element)
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Checks whether `attr` is present and contains `needle`, ignoring case.
    pub fn attr_contains_ignore_case(&self, attr: &str, needle: &str) -> bool {
        self.attr(attr)
            .is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase()))
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Checks the tag name, ignoring case.
    pub fn is(&self, tag: &str) -> bool {
        self.element.value().name().eq_ignore_ascii_case(tag)
    }

    /// Gets the next sibling that is an element, skipping text and comments.
    pub fn next_element_sibling(&self) -> Option<Element<'a>> {
        self.element.next_siblings().find_map(ElementRef::wrap).map(Element::new)
    }

    /// Gets the direct child elements of this element.
    pub fn child_elements(&self) -> Vec<Element<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::new).collect()
    }

    /// Gets the first descendant with the given tag name, excluding this
    /// element itself.
    pub fn first_descendant(&self, tag: &str) -> Option<Element<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(Element::new)
    }
}
