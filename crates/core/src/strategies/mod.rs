//! The ordered abstract-finding strategies.
//!
//! Each strategy is a pure function from a [`Context`] to an optional
//! [`Found`]. [`STRATEGIES`] lists them in priority order and the extractor
//! takes the first one that succeeds.

pub mod correlation;
pub mod heading;
pub mod meta_tags;
pub mod selectors;

use crate::extract::{ExtractConfig, StrategyTag};
use crate::parse::Document;

/// Everything a strategy may look at for one extraction.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub doc: &'a Document,
    pub snippet: Option<&'a str>,
    pub config: &'a ExtractConfig,
}

impl<'a> Context<'a> {
    pub fn new(doc: &'a Document, snippet: Option<&'a str>, config: &'a ExtractConfig) -> Self {
        Self { doc, snippet, config }
    }
}

/// An accepted abstract and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub text: String,
    pub source: StrategyTag,
}

impl Found {
    pub fn new(text: impl Into<String>, source: StrategyTag) -> Self {
        Self { text: text.into(), source }
    }
}

pub type Strategy = fn(&Context<'_>) -> Option<Found>;

/// Strategies in the order they are tried.
pub const STRATEGIES: [(StrategyTag, Strategy); 4] = [
    (StrategyTag::Metadata, meta_tags::from_meta_tags),
    (StrategyTag::DomSelector, selectors::from_containers),
    (StrategyTag::HeadingParagraph, heading::from_heading_pattern),
    (StrategyTag::SnippetCorrelation, correlation::from_snippet),
];

/// Length in characters, which is what every threshold counts.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
