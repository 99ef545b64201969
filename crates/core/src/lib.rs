pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod metadata;
pub mod parse;
pub mod reader;
mod render;
pub mod strategies;

pub use error::{ReadabsError, Result};
pub use extract::{BLOCKED_REASON, ExtractConfig, ExtractionOutcome, StrategyTag};
pub use extract::{extract, extract_with_config};
pub use fetch::{DEFAULT_USER_AGENT, FetchConfig, fetch_file, fetch_stdin, parse_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter};
pub use formatters::{convert_to_json, convert_to_text, render_outcome};
pub use metadata::{MetaKey, Metadata};
pub use parse::{Document, Element};
#[cfg(feature = "fetch")]
pub use reader::fetch_and_read;
pub use reader::{DYNAMIC_PROCEEDINGS_HOSTS, Reader, ReaderConfig, ReaderConfigBuilder, Reading, read_html};
#[doc(hidden)]
pub use strategies::{Context, Found, STRATEGIES, Strategy};
