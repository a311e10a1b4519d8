//! Sort key composition
//!
//! A key is a list of fragments joined by the configured separator:
//! the matched bucket's index (or `999` when no bucket matched), one fragment
//! per sort criterion of that bucket, then optionally the basename. Keys are
//! compared as plain strings, so every fragment is made fixed-width where it
//! matters (bucket index, timestamps) and descending criteria invert their
//! digits.

use crate::context::RuleEvaluationContext;
use crate::engine::dates::{
    find_embedded_date, format_sort_timestamp, invert_digits, looks_like_date, parse_date_value,
    sanitize_fragment,
};
use crate::engine::matcher::Matcher;
use crate::engine::values::resolve_values;
use crate::rules::{
    ConditionSource, CriterionType, MissingValuePlacement, SortCriteria, SortDirection,
    SortSettings,
};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Leading fragment of notes no bucket matched; sorts after every real index
pub const UNMATCHED_BUCKET: &str = "999";

/// Placeholder for a missing value placed first
pub const MISSING_FIRST: &str = "!";

/// Placeholder for a missing value placed last
pub const MISSING_LAST: &str = "~";

/// Frontmatter field names treated as dates without an explicit type
const DATE_FIELDS: &[&str] = &[
    "scheduled",
    "due",
    "start",
    "end",
    "date",
    "created",
    "modified",
    "updated",
    "completed",
    "deadline",
    "done",
    "ctime",
    "mtime",
];

/// Field name fragments whose dates sort by day only
const DAY_PRECISION_FIELDS: &[&str] = &["modified", "updated", "mtime"];

/// Compose the sort key of a note
#[must_use]
pub fn compose_sort_key(
    settings: &SortSettings,
    ctx: &RuleEvaluationContext,
    matcher: &Matcher,
) -> String {
    let mut fragments: Vec<String> = Vec::new();

    let matched = settings
        .buckets
        .iter()
        .enumerate()
        .filter(|(_, bucket)| bucket.enabled)
        .find(|(_, bucket)| matcher.matches_bucket(bucket, ctx));

    match matched {
        Some((index, bucket)) => {
            tracing::trace!(
                bucket = index,
                id = bucket.id.as_deref().unwrap_or(""),
                path = %ctx.file.path,
                "sort bucket matched"
            );
            if settings.bucket_index_prefix {
                fragments.push(format!("{index:03}"));
            }
            fragments.extend(
                bucket
                    .sort_criteria
                    .iter()
                    .map(|criteria| criterion_fragment(criteria, ctx, &settings.separator)),
            );
        }
        None => fragments.push(UNMATCHED_BUCKET.to_string()),
    }

    if settings.append_basename {
        fragments.push(ctx.file.basename.clone());
    }

    let separator = settings.separator.as_str();
    fragments
        .iter()
        .map(|fragment| sanitize_fragment(fragment, separator))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Compute every key in parallel and order the notes by key
///
/// Returns `(input index, key)` pairs in ascending key order; equal keys keep
/// their input order.
#[must_use]
pub fn order_documents(
    settings: &SortSettings,
    contexts: &[RuleEvaluationContext],
    matcher: &Matcher,
) -> Vec<(usize, String)> {
    let mut keyed: Vec<(usize, String)> = contexts
        .par_iter()
        .enumerate()
        .map(|(index, ctx)| (index, compose_sort_key(settings, ctx, matcher)))
        .collect();

    keyed.sort_by(|a, b| compare_sort_keys(&a.1, &b.1).then(a.0.cmp(&b.0)));

    tracing::debug!(
        documents = keyed.len(),
        buckets = settings.buckets.len(),
        "ordered documents"
    );
    keyed
}

/// Ascending comparator for sort keys
#[must_use]
pub fn compare_sort_keys(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Fragment contributed by one criterion
///
/// A value that sanitizes to nothing counts as missing, so every criterion
/// keeps its position in the key.
fn criterion_fragment(
    criteria: &SortCriteria,
    ctx: &RuleEvaluationContext,
    separator: &str,
) -> String {
    let values = resolve_values(&criteria.source, &criteria.field, ctx);
    let raw = values.iter().map(|v| v.trim()).find(|v| !v.is_empty());
    let usable = |value: &String| !sanitize_fragment(value, separator).is_empty();

    let derived = derive_value(criteria, raw, ctx)
        .filter(usable)
        .or_else(|| {
            criteria
                .fallback
                .as_deref()
                .map(str::to_string)
                .filter(usable)
        });

    match derived {
        Some(value) if criteria.direction == SortDirection::Desc => invert_digits(&value),
        Some(value) => value,
        None => missing_placeholder(criteria.missing_value_placement).to_string(),
    }
}

/// Turn the first non-blank value into a sortable string
fn derive_value(
    criteria: &SortCriteria,
    raw: Option<&str>,
    ctx: &RuleEvaluationContext,
) -> Option<String> {
    if let Some(raw) = raw
        && let Some(mapping) = criteria
            .mappings
            .iter()
            .find(|m| m.input.trim().eq_ignore_ascii_case(raw))
    {
        return Some(mapping.output.clone());
    }

    if is_date_criterion(criteria, raw) {
        let parsed = match raw {
            Some(raw) => parse_date_value(raw),
            None => find_embedded_date(&ctx.file.basename),
        };
        if let Some(at) = parsed {
            return Some(format_sort_timestamp(&at, is_day_precision(criteria)));
        }
    }

    raw.map(str::to_string)
}

/// Whether values of the criterion are dates
fn is_date_criterion(criteria: &SortCriteria, raw: Option<&str>) -> bool {
    if criteria.kind == Some(CriterionType::Date) || criteria.source.is_date() {
        return true;
    }
    let field = criteria.field.trim().to_lowercase();
    if criteria.source == ConditionSource::Frontmatter && DATE_FIELDS.contains(&field.as_str()) {
        return true;
    }
    raw.is_some_and(looks_like_date)
}

/// Modification-style dates sort by day only
fn is_day_precision(criteria: &SortCriteria) -> bool {
    if criteria.source == ConditionSource::DateModified {
        return true;
    }
    let field = criteria.field.to_lowercase();
    DAY_PRECISION_FIELDS.iter().any(|name| field.contains(name))
}

const fn missing_placeholder(placement: MissingValuePlacement) -> &'static str {
    match placement {
        MissingValuePlacement::First => MISSING_FIRST,
        MissingValuePlacement::Last => MISSING_LAST,
    }
}

#[cfg(test)]
#[path = "sort_key_tests.rs"]
mod sort_key_tests;
