use owo_colors::OwoColorize;
use readabs_core::{ExtractionOutcome, Reading};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Readabs".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Read paper abstracts from scholarly landing pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    if ms < 50.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "fast".dimmed());
    } else if ms < 100.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "slow".bright_red());
    }
}

/// Print a summary of what the reader produced
pub fn print_reading_details(reading: &Reading) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Reading Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    match reading {
        Reading::Extracted { outcome, metadata, .. } => {
            if let Some(title) = &metadata.title {
                eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
            }
            match outcome {
                ExtractionOutcome::Found { text, source } => {
                    print_success(&format!("Abstract found via {}", source));
                    eprintln!("  {} {}", "Length:".dimmed(), text.chars().count().to_string().bright_white());
                }
                ExtractionOutcome::Blocked { reason } => print_warning(&format!("Page blocked: {}", reason)),
                ExtractionOutcome::NotFound { fallback } => {
                    let note = if fallback.is_some() { "falling back to snippet" } else { "no snippet given" };
                    print_warning(&format!("No abstract found, {}", note));
                }
            }
        }
        Reading::Skipped { host, .. } => print_info(&format!("Skipped {}, abstracts load dynamically", host)),
    }
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
