//! Sort-key command - compose the sort key of each note

use super::{OutputOptions, load_documents};
use crate::{
    NotesortError, RuleEngine,
    config::NotesortConfig,
    context::RuleEvaluationContext,
    output::{self, SortKeyRow},
};
use std::path::Path;

type Result<T> = std::result::Result<T, NotesortError>;

/// Execute the sort-key command
///
/// # Errors
///
/// Returns `NotesortError` if the note file cannot be read or output fails.
pub fn execute(
    engine: &RuleEngine,
    config: &NotesortConfig,
    file: &Path,
    ordered: bool,
    options: OutputOptions,
) -> Result<()> {
    let contexts = load_documents(file)?;

    if contexts.is_empty() {
        if !options.quiet {
            println!("No notes found in {}.", file.display());
        }
        return Ok(());
    }

    let rows = sort_keys(engine, config, &contexts, ordered);
    println!("{}", output::render_sort_keys(&rows, options.format, options.quiet)?);
    Ok(())
}

/// Sort keys in input order, or in ascending key order when `ordered`
#[must_use]
pub fn sort_keys(
    engine: &RuleEngine,
    config: &NotesortConfig,
    contexts: &[RuleEvaluationContext],
    ordered: bool,
) -> Vec<SortKeyRow> {
    if ordered {
        return engine
            .order_documents(&config.sort, contexts)
            .into_iter()
            .map(|(index, key)| SortKeyRow::new(contexts[index].file.path.clone(), key))
            .collect();
    }

    contexts
        .iter()
        .map(|ctx| SortKeyRow::new(ctx.file.path.clone(), engine.compose_sort_key(&config.sort, ctx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{SortBucket, SortCriteria, SortSettings};
    use crate::testing::{fixed_clock, note};
    use serde_json::json;

    fn config() -> NotesortConfig {
        NotesortConfig {
            sort: SortSettings {
                append_basename: true,
                buckets: vec![SortBucket::new().with_criteria(SortCriteria::frontmatter("due"))],
                ..SortSettings::default()
            },
            ..NotesortConfig::default()
        }
    }

    fn contexts() -> Vec<RuleEvaluationContext> {
        vec![
            note("b.md").frontmatter_entry("due", json!("2026-03-01")).build(),
            note("a.md").frontmatter_entry("due", json!("2026-02-12")).build(),
        ]
    }

    #[test]
    fn test_sort_keys_input_order() {
        let rows = sort_keys(&RuleEngine::new(fixed_clock()), &config(), &contexts(), false);
        assert_eq!(rows[0].path, "b.md");
        assert_eq!(rows[1].key, "000_2026-02-12-00-00-00_a");
    }

    #[test]
    fn test_sort_keys_ordered() {
        let rows = sort_keys(&RuleEngine::new(fixed_clock()), &config(), &contexts(), true);
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a.md", "b.md"]);
    }
}
