mod cli;
mod echo;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use readabs_core::formatters::LOADING_MESSAGE;
use readabs_core::{
    DEFAULT_USER_AGENT, JsonConfig, Reader, ReaderConfig, Reading, TextConfig, convert_to_json, convert_to_text,
    fetch_file, fetch_stdin,
};
use tracing_subscriber::EnvFilter;

use cli::{Args, OutputFormat};

use echo::{format_size, print_banner, print_error, print_info, print_reading_details, print_step, print_success, print_timing};

const VERSION: &str = env!("CARGO_PKG_VERSION");

impl Args {
    fn reader_config(&self) -> ReaderConfig {
        let mut builder = ReaderConfig::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if self.skip_dynamic_hosts {
            builder = builder.skip_dynamic_hosts();
        }
        builder.build()
    }

    fn input(&self) -> &str {
        self.input.as_deref().unwrap_or("-")
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,readabs_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn read(args: &Args, reader: &Reader) -> anyhow::Result<Reading> {
    let snippet = args.snippet.as_deref();
    let input = args.input();

    if input.starts_with("http://") || input.starts_with("https://") {
        if args.verbose {
            print_step(1, 3, &format!("Fetching {}", input.bright_white().underline()));
            print_info(LOADING_MESSAGE);
        }
        return reader.read_url(input, snippet).await.context("Failed to read URL");
    }

    let html = if input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        eprintln!();
    }

    reader.read_html(&html, snippet).context("Failed to parse HTML")
}

fn render(args: &Args, reading: &Reading) -> anyhow::Result<String> {
    match args.format {
        OutputFormat::Text => {
            let config = TextConfig { line_width: args.width, include_header: args.header, include_source: args.show_source };
            Ok(convert_to_text(reading, &config))
        }
        OutputFormat::Json => {
            let config = JsonConfig { include_message: true, pretty: args.pretty };
            convert_to_json(reading, &config).context("Failed to convert to JSON")
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let reader = Reader::with_config(args.reader_config());

    let started = Instant::now();
    let reading = read(&args, &reader).await?;

    if args.verbose {
        print_step(2, 3, "Extracted abstract");
        print_timing("Read", started.elapsed());
        print_reading_details(&reading);
    }

    let mut output = render(&args, &reading)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    if args.verbose {
        print_step(3, 3, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "readabs", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
