pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, JsonOutput, convert_to_json};
pub use text::{TextConfig, TextFormatter, convert_to_text, render_outcome, render_skipped};
pub use text::{BLOCKED_MESSAGE, LOADING_MESSAGE, NO_SNIPPET, NOT_FOUND_LEAD};
