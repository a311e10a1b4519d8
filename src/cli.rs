//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for notesort using the `clap` crate.
//! Note descriptors are read from a JSON file (one record or an array of
//! records); rules come from the configuration file.
//!
//! # Commands
//!
//! - **classify**: Print the icon, color and hide decision for each note
//! - **sort-key**: Print the composite sort key for each note
//! - **config**: Show where configuration lives and what was loaded
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use notesort::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["notesort", "sort-key", "notes.json", "--ordered"]);
//! assert!(matches!(cli.command, Commands::SortKey { ordered: true, .. }));
//! ```

use crate::config::OutputFormat;
use crate::engine::Clock;
use chrono::{DateTime, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "notesort")]
#[command(about = "Classify and order notes with configurable rules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as of this instant (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long = "now", value_name = "WHEN", value_parser = parse_clock, global = true)]
    pub now: Option<Clock>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Output format (overrides config)
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Log engine decisions (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve icon, color and hide decision for each note
    #[command(visible_alias = "c")]
    Classify {
        /// JSON file with one note descriptor or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compose the sort key of each note
    #[command(name = "sort-key", visible_alias = "s")]
    SortKey {
        /// JSON file with one note descriptor or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print notes in sort order instead of input order
        #[arg(short = 'o', long = "ordered")]
        ordered: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the default configuration file path
    Path,

    /// Print the loaded configuration
    Show,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The clock to evaluate with: `--now` if given, else the system time
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.now.unwrap_or_else(Clock::system)
    }
}

/// Parse `--now` as RFC 3339 or a bare local date (local midnight)
///
/// # Errors
///
/// Returns a message when the value is neither format.
pub fn parse_clock(value: &str) -> Result<Clock, String> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(Clock::fixed(at.with_timezone(&Local)));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(Clock::fixed)
        .ok_or_else(|| format!("'{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date"))
}
