//! Notesort CLI application entry point
//!
//! Reads note descriptors from a JSON file, evaluates the configured rules
//! and prints classifications or sort keys.
//!
//! # Usage
//!
//! ```bash
//! # Icon, color and hide decision for each note
//! notesort classify notes.json
//!
//! # Sort keys, in sort order, as CSV
//! notesort sort-key notes.json --ordered --format csv
//!
//! # Evaluate date rules as of a fixed day
//! notesort --now 2026-02-10 classify notes.json
//!
//! # Show the loaded configuration
//! notesort config show
//! ```
//!
//! # Configuration
//!
//! Rules are read from `--config <FILE>` or the user's config directory
//! (`~/.config/notesort/config.toml` on Linux). Without a file every note is
//! unclassified and sorts under the `999` sentinel.

use notesort::{
    NotesortError, RuleEngine,
    cli::{Cli, Commands},
    commands::{self, OutputOptions},
    config::NotesortConfig,
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, NotesortError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins unless `-v` asks for more
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notesort=warn")),
        1 => EnvFilter::new("notesort=debug"),
        _ => EnvFilter::new("notesort=trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load configuration and dispatch to the command handler
///
/// # Errors
///
/// Returns `NotesortError` if configuration loading fails or the command fails.
fn run(cli: &Cli) -> Result<()> {
    let config = NotesortConfig::load(cli.config.as_deref())?;

    let options = OutputOptions {
        format: cli.format.unwrap_or(config.format),
        quiet: cli.quiet || config.quiet,
    };
    let engine = RuleEngine::new(cli.clock());

    match &cli.command {
        Commands::Classify { file } => commands::classify(&engine, &config, file, options),
        Commands::SortKey { file, ordered } => {
            commands::sort_key(&engine, &config, file, *ordered, options)
        }
        Commands::Config { command } => commands::config(&config, *command, options.format),
    }
}
