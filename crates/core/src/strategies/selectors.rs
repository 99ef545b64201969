//! Abstracts in well-known publisher containers.

use std::fmt;

use tracing::{debug, trace};

use super::{Context, Found, char_len};
use crate::extract::StrategyTag;
use crate::parse::{Document, Element};

/// One way of locating an abstract container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerProbe {
    /// A plain CSS selector, matched as written.
    Css(&'static str),
    /// A `tag` whose `attr` contains "abstract" in any letter case.
    AttrContains { tag: &'static str, attr: &'static str },
}

const ABSTRACT_NEEDLE: &str = "abstract";

/// Containers tried in order. Exact publisher class and id names come
/// first, then the generic "abstract" substring matches.
pub const ABSTRACT_CONTAINERS: [ContainerProbe; 12] = [
    // ACM Digital Library
    ContainerProbe::Css(".abstractSection"),
    ContainerProbe::Css(".abstract"),
    ContainerProbe::Css("#abstract"),
    ContainerProbe::Css(".Abstract"),
    // Springer
    ContainerProbe::Css(".c-article-section__content"),
    ContainerProbe::Css(".abstract-author"),
    // ScienceDirect
    ContainerProbe::Css(".cas-body"),
    ContainerProbe::AttrContains { tag: "div", attr: "class" },
    ContainerProbe::AttrContains { tag: "section", attr: "class" },
    ContainerProbe::AttrContains { tag: "div", attr: "id" },
    ContainerProbe::AttrContains { tag: "section", attr: "id" },
    ContainerProbe::Css(".pub-abstract"),
];

impl ContainerProbe {
    /// The first element in document order this probe matches.
    pub fn first_match<'a>(&self, doc: &'a Document) -> Option<Element<'a>> {
        match *self {
            ContainerProbe::Css(selector) => doc.select_first(selector).ok().flatten(),
            ContainerProbe::AttrContains { tag, attr } => {
                doc.elements_with_attr_containing(tag, attr, ABSTRACT_NEEDLE).into_iter().next()
            }
        }
    }
}

impl fmt::Display for ContainerProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerProbe::Css(selector) => write!(f, "{}", selector),
            ContainerProbe::AttrContains { tag, attr } => write!(f, "{}[{}*=\"{}\" i]", tag, attr, ABSTRACT_NEEDLE),
        }
    }
}

/// The rendered text of the first probed container long enough to be an
/// abstract.
///
/// Only the first match of each probe is examined. An earlier probe wins
/// even when a later one would have found more text.
pub fn from_containers(ctx: &Context<'_>) -> Option<Found> {
    for probe in &ABSTRACT_CONTAINERS {
        let Some(element) = probe.first_match(ctx.doc) else {
            trace!(%probe, "container not found");
            continue;
        };

        let text = element.rendered_text();
        let text = text.trim();
        let chars = char_len(text);
        debug!(%probe, chars, "checking container");

        if chars > ctx.config.min_container_chars {
            debug!(%probe, "found abstract container");
            return Some(Found::new(text, StrategyTag::DomSelector));
        }
    }

    None
}
