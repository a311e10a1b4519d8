//! Command implementations
//!
//! Each command is a module with an execute function that takes the loaded
//! configuration and parsed CLI args and prints its result.

pub mod classify;
pub mod config;
pub mod sort_key;

pub use classify::execute as classify;
pub use config::execute as config;
pub use sort_key::execute as sort_key;

use crate::NotesortError;
use crate::config::OutputFormat;
use crate::context::{RuleEvaluationContext, parse_records};
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, NotesortError>;

/// Output settings shared by commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Read note descriptors from a JSON file
///
/// Records without a path cannot be evaluated and are skipped with a warning.
///
/// # Errors
///
/// Returns `NotesortError` if the file cannot be read or is not valid JSON.
pub fn load_documents(path: &Path) -> Result<Vec<RuleEvaluationContext>> {
    let text = fs::read_to_string(path)?;
    parse_documents(&text)
}

/// Parse note descriptors from JSON text
///
/// # Errors
///
/// Returns `NotesortError` if the text is not a record or an array of records.
pub fn parse_documents(text: &str) -> Result<Vec<RuleEvaluationContext>> {
    let records = parse_records(text)?;
    let total = records.len();

    let contexts: Vec<RuleEvaluationContext> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            if record.path.trim().is_empty() {
                tracing::warn!(record = index, "skipping note without a path");
                None
            } else {
                Some(RuleEvaluationContext::from(record))
            }
        })
        .collect();

    tracing::debug!(read = total, usable = contexts.len(), "loaded note descriptors");
    Ok(contexts)
}
