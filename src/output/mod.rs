//! Output formatting for CLI display
//!
//! Commands build plain rows and hand them here; rendering picks text,
//! JSON or CSV from the configured `OutputFormat`.

use crate::NotesortError;
use crate::config::OutputFormat;
use crate::engine::VisualRuleResult;
use colored::{Color, Colorize};
use serde::Serialize;

type Result<T> = std::result::Result<T, NotesortError>;

/// Classification of one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRow {
    pub path: String,
    pub icon: Option<String>,
    pub icon_rule: Option<String>,
    pub color: Option<String>,
    pub color_rule: Option<String>,
    pub hidden_by: Option<String>,
}

impl ClassificationRow {
    #[must_use]
    pub fn new(path: impl Into<String>, visual: VisualRuleResult, hidden_by: Option<&str>) -> Self {
        Self {
            path: path.into(),
            icon: visual.icon.value,
            icon_rule: visual.icon.rule_id,
            color: visual.color.value,
            color_rule: visual.color.rule_id,
            hidden_by: hidden_by.map(str::to_string),
        }
    }
}

/// Sort key of one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKeyRow {
    pub path: String,
    pub key: String,
}

impl SortKeyRow {
    #[must_use]
    pub fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

/// Render classification rows
///
/// # Errors
///
/// Returns `NotesortError` if JSON or CSV serialization fails.
pub fn render_classifications(
    rows: &[ClassificationRow],
    format: OutputFormat,
    quiet: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => to_csv(rows),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| classification_line(row, quiet))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render sort key rows
///
/// # Errors
///
/// Returns `NotesortError` if JSON or CSV serialization fails.
pub fn render_sort_keys(rows: &[SortKeyRow], format: OutputFormat, quiet: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => to_csv(rows),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| sort_key_line(row, quiet))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| NotesortError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| NotesortError::InvalidInput(e.to_string()))
}

/// Format a classification for the terminal
#[must_use]
pub fn classification_line(row: &ClassificationRow, quiet: bool) -> String {
    let icon = row.icon.as_deref().unwrap_or("-");
    let color = row.color.as_deref().unwrap_or("-");

    if quiet {
        return format!("{}\t{icon}\t{color}", row.path);
    }

    let mut line = format!(
        "  {}  icon: {}  color: {}",
        row.path.bold(),
        with_rule(icon, row.icon_rule.as_deref()),
        with_rule(&paint(color), row.color_rule.as_deref()),
    );
    if let Some(rule) = &row.hidden_by {
        line.push_str(&format!("  {}", format!("hidden by {rule}").dimmed()));
    }
    line
}

/// Format a sort key for the terminal
#[must_use]
pub fn sort_key_line(row: &SortKeyRow, quiet: bool) -> String {
    if quiet {
        format!("{}\t{}", row.key, row.path)
    } else {
        format!("  {}  {}", row.key.cyan(), row.path)
    }
}

fn with_rule(value: &str, rule: Option<&str>) -> String {
    match rule {
        Some(rule) => format!("{value} {}", format!("({rule})").dimmed()),
        None => value.to_string(),
    }
}

/// Paint a color token in its own color when it names one
fn paint(token: &str) -> String {
    match token.parse::<Color>() {
        Ok(color) => token.color(color).to_string(),
        Err(()) => token.to_string(),
    }
}
