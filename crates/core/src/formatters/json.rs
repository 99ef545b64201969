use serde::Serialize;

use crate::Result;
use crate::formatters::text::render_outcome;
use crate::reader::Reading;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Add the human-readable message next to the structured outcome
    pub include_message: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    #[serde(flatten)]
    pub reading: &'a Reading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Convert a reading to JSON
pub fn convert_to_json(reading: &Reading, config: &JsonConfig) -> Result<String> {
    let message = config.include_message.then(|| match reading {
        Reading::Extracted { outcome, .. } => render_outcome(outcome),
        Reading::Skipped { host, snippet, .. } => crate::formatters::text::render_skipped(host, snippet.as_deref()),
    });

    let output = JsonOutput { reading, message };

    if config.pretty {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(serde_json::to_string(&output)?)
    }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, reading: &Reading) -> Result<String> {
        convert_to_json(reading, &self.config)
    }
}
