//! Config command - show configuration location and contents

use crate::{
    NotesortError,
    cli::ConfigCommands,
    config::{NotesortConfig, OutputFormat},
};

type Result<T> = std::result::Result<T, NotesortError>;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `NotesortError` if the config directory is unknown or the
/// configuration cannot be rendered.
pub fn execute(config: &NotesortConfig, command: ConfigCommands, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", NotesortConfig::config_path()?.display());
        }
        ConfigCommands::Show => {
            println!("{}", render(config, format)?);
        }
    }
    Ok(())
}

/// Render the configuration: JSON when asked for, TOML otherwise
///
/// # Errors
///
/// Returns `NotesortError` if serialization fails.
pub fn render(config: &NotesortConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text | OutputFormat::Csv => Ok(config.to_toml()?),
    }
}
