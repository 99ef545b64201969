use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Document;
use crate::parse::Element;

static DOI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"10\.\d{4,9}/[^\s\x22<>]+").expect("DOI_PATTERN regex"));

/// Citation details of the landing page, shown next to the abstract.
///
/// None of these fields influence which abstract text is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    pub doi: Option<String>,
    pub published: Option<String>,
    pub venue: Option<String>,
}

/// Which attribute of a `<meta>` tag carries its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`, used by Open Graph.
    Property,
}

impl MetaKey {
    fn attr(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

impl Document {
    /// Finds the first `<meta>` tag whose `name` or `property` equals `value`.
    pub fn meta_element(&'_ self, key: MetaKey, value: &str) -> Option<Element<'_>> {
        let selector = format!("meta[{}=\"{}\"]", key.attr(), value);
        self.select_first(&selector).ok().flatten()
    }

    /// Gets the trimmed, non-empty `content` of the first matching meta tag.
    pub fn meta_content(&self, key: MetaKey, value: &str) -> Option<String> {
        let content = self.meta_element(key, value)?.attr("content")?.trim();
        if content.is_empty() { None } else { Some(content.to_string()) }
    }

    /// Gets the content of every matching meta tag, in document order.
    pub fn meta_contents(&self, key: MetaKey, value: &str) -> Vec<String> {
        let selector = format!("meta[{}=\"{}\"]", key.attr(), value);
        self.select(&selector)
            .unwrap_or_default()
            .iter()
            .filter_map(|el| el.attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Extract title with priority fallback:
    /// 1. `citation_title`
    /// 2. `DC.Title` / `dc.title`
    /// 3. Open Graph `og:title`
    /// 4. `<title>` element
    pub fn extract_title(&self) -> Option<String> {
        self.meta_content(MetaKey::Name, "citation_title")
            .or_else(|| self.meta_content(MetaKey::Name, "DC.Title"))
            .or_else(|| self.meta_content(MetaKey::Name, "dc.title"))
            .or_else(|| self.meta_content(MetaKey::Property, "og:title"))
            .or_else(|| self.title().filter(|title| !title.is_empty()))
    }

    /// Extract all `citation_author` values, falling back to `DC.Creator`.
    pub fn extract_authors(&self) -> Vec<String> {
        let authors = self.meta_contents(MetaKey::Name, "citation_author");
        if !authors.is_empty() {
            return authors;
        }
        self.meta_contents(MetaKey::Name, "DC.Creator")
    }

    /// Extract the DOI from `citation_doi` or a `DC.Identifier` that holds one.
    ///
    /// Values like `https://doi.org/10.1000/xyz` are reduced to the bare DOI.
    pub fn extract_doi(&self) -> Option<String> {
        let candidates = self
            .meta_content(MetaKey::Name, "citation_doi")
            .into_iter()
            .chain(self.meta_contents(MetaKey::Name, "DC.Identifier"))
            .chain(self.meta_contents(MetaKey::Name, "dc.identifier"));

        for candidate in candidates {
            if let Some(doi) = DOI_PATTERN.find(&candidate) {
                return Some(doi.as_str().to_string());
            }
        }

        None
    }

    /// Extract publication date with priority fallback:
    /// 1. `citation_publication_date`
    /// 2. `citation_date`
    /// 3. `DC.Date`
    pub fn extract_published(&self) -> Option<String> {
        self.meta_content(MetaKey::Name, "citation_publication_date")
            .or_else(|| self.meta_content(MetaKey::Name, "citation_date"))
            .or_else(|| self.meta_content(MetaKey::Name, "DC.Date"))
    }

    /// Extract the journal or conference name.
    pub fn extract_venue(&self) -> Option<String> {
        self.meta_content(MetaKey::Name, "citation_journal_title")
            .or_else(|| self.meta_content(MetaKey::Name, "citation_conference_title"))
            .or_else(|| self.meta_content(MetaKey::Property, "og:site_name"))
    }

    /// Extract all metadata at once
    pub fn extract_metadata(&self) -> Metadata {
        Metadata {
            title: self.extract_title(),
            authors: self.extract_authors(),
            doi: self.extract_doi(),
            published: self.extract_published(),
            venue: self.extract_venue(),
        }
    }
}
