// Command line arguments. `build.rs` includes this file to generate shell
// completions from the same definition.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap_complete::Shell;

/// Output format for the reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Read the abstract of a paper from its landing page
#[derive(Parser, Debug)]
#[command(name = "readabs")]
#[command(author = "Readabs Contributors")]
#[command(version)]
#[command(about = "Read paper abstracts from scholarly landing pages", long_about = None)]
pub struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    pub input: Option<String>,

    /// Search result snippet used to locate the abstract and as a fallback
    #[arg(short, long, value_name = "TEXT")]
    pub snippet: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Wrap text output at this width (0 disables wrapping)
    #[arg(short, long, default_value = "0", value_name = "COLS")]
    pub width: usize,

    /// Print the paper's citation metadata above the abstract (text only)
    #[arg(long)]
    pub header: bool,

    /// Name the strategy that found the abstract (text only)
    #[arg(long)]
    pub show_source: bool,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Answer proceedings hosts that load abstracts dynamically from the snippet
    #[arg(long)]
    pub skip_dynamic_hosts: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
