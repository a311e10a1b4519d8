//! Classify command - resolve icon, color and hide decision per note

use super::{OutputOptions, load_documents};
use crate::{
    NotesortError, RuleEngine,
    config::NotesortConfig,
    context::RuleEvaluationContext,
    output::{self, ClassificationRow},
};
use std::path::Path;

type Result<T> = std::result::Result<T, NotesortError>;

/// Execute the classify command
///
/// # Errors
///
/// Returns `NotesortError` if the note file cannot be read or output fails.
pub fn execute(
    engine: &RuleEngine,
    config: &NotesortConfig,
    file: &Path,
    options: OutputOptions,
) -> Result<()> {
    let contexts = load_documents(file)?;

    if contexts.is_empty() {
        if !options.quiet {
            println!("No notes found in {}.", file.display());
        }
        return Ok(());
    }

    let rows = classify_all(engine, config, &contexts);
    println!("{}", output::render_classifications(&rows, options.format, options.quiet)?);
    Ok(())
}

/// Classify every note in input order
#[must_use]
pub fn classify_all(
    engine: &RuleEngine,
    config: &NotesortConfig,
    contexts: &[RuleEvaluationContext],
) -> Vec<ClassificationRow> {
    contexts
        .iter()
        .map(|ctx| {
            let visual = engine.resolve_visual(&config.visual_rules, ctx);
            let hidden = engine.resolve_hidden(&config.hide_rules, ctx);
            ClassificationRow::new(ctx.file.path.clone(), visual, hidden)
        })
        .collect()
}
