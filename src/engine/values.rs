//! Value source resolution
//!
//! Turns a condition's `(source, field)` into the list of strings operators
//! compare against. Resolution never fails: a source with nothing to offer
//! yields an empty list.

use crate::context::RuleEvaluationContext;
use crate::engine::dates::format_iso_local;
use crate::rules::ConditionSource;
use serde_json::Value;

/// Resolve the comparable values of `source` for the note
#[must_use]
pub fn resolve_values(
    source: &ConditionSource,
    field: &str,
    ctx: &RuleEvaluationContext,
) -> Vec<String> {
    match source {
        ConditionSource::Path => vec![folder_of(&ctx.file.path)],
        ConditionSource::Extension => vec![ctx.file.extension.clone()],
        ConditionSource::Name => vec![ctx.file.name.clone(), ctx.file.basename.clone()],
        ConditionSource::Frontmatter => frontmatter_values(field, ctx),
        ConditionSource::Tag => tag_values(ctx),
        ConditionSource::Body => ctx.body.iter().cloned().collect(),
        ConditionSource::Backlink => backlink_values(field, ctx),
        ConditionSource::DateCreated => ctx.file.created.iter().map(format_iso_local).collect(),
        ConditionSource::DateModified => ctx.file.modified.iter().map(format_iso_local).collect(),
        ConditionSource::Unrecognized(_) => Vec::new(),
    }
}

/// Folder portion of a path: repeated separators collapsed, no leading or
/// trailing separator, empty at the root
#[must_use]
pub fn folder_of(path: &str) -> String {
    let normalized = normalize_folder(path);
    match normalized.rsplit_once('/') {
        Some((folder, _)) => folder.to_string(),
        None => String::new(),
    }
}

/// Collapse repeated separators and strip leading/trailing ones
#[must_use]
pub fn normalize_folder(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Basename (last component, extension removed) of a path
#[must_use]
pub fn basename_of(path: &str) -> String {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Normalize a tag for comparison: no leading `#`, lower case
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').to_lowercase()
}

fn frontmatter_values(field: &str, ctx: &RuleEvaluationContext) -> Vec<String> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    if let Some(value) = ctx.frontmatter.get(field) {
        flatten_value(value, &mut out);
    }
    out
}

/// Flatten a frontmatter value into strings
///
/// Arrays flatten recursively, `null` contributes nothing, objects fall back
/// to their JSON text.
pub fn flatten_value(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.trim().to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Array(items) => {
            for item in items {
                flatten_value(item, out);
            }
        }
        Value::Object(_) => out.push(value.to_string()),
    }
}

fn tag_values(ctx: &RuleEvaluationContext) -> Vec<String> {
    let mut raw: Vec<String> = ctx.tags.clone();

    if let Some(value) = ctx.frontmatter.get("tags") {
        let mut flattened = Vec::new();
        flatten_value(value, &mut flattened);
        for entry in flattened {
            raw.extend(
                entry
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
        }
    }

    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let normalized = normalize_tag(&tag);
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

fn backlink_values(field: &str, ctx: &RuleEvaluationContext) -> Vec<String> {
    let field = field.trim();
    let mut out = Vec::new();

    for link in &ctx.backlinks {
        if !field.is_empty() {
            let keyed = link
                .via_key
                .as_deref()
                .is_some_and(|key| key.trim().eq_ignore_ascii_case(field));
            if !keyed {
                continue;
            }
        }
        out.push(link.source.clone());
        out.push(basename_of(&link.source));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Backlink;
    use chrono::{Local, TimeZone, Utc};
    use serde_json::json;

    fn ctx() -> RuleEvaluationContext {
        RuleEvaluationContext::builder("//Projects//Client A/Plan.md")
            .frontmatter_entry("Status", json!("  active "))
            .frontmatter_entry("aliases", json!(["one", ["two", 3], null, true]))
            .frontmatter_entry("meta", json!({"k": "v"}))
            .frontmatter_entry("tags", json!("Alpha, #beta gamma"))
            .tag("#Work")
            .tag("alpha")
            .backlink(Backlink::new("Index.md"))
            .backlink(Backlink::via("Areas/Clients.md", "Client"))
            .build()
    }

    #[test]
    fn test_path_is_normalized_folder() {
        let values = resolve_values(&ConditionSource::Path, "", &ctx());
        assert_eq!(values, vec!["Projects/Client A".to_string()]);
    }

    #[test]
    fn test_path_at_root_is_empty() {
        let root = RuleEvaluationContext::builder("Inbox.md").build();
        assert_eq!(resolve_values(&ConditionSource::Path, "", &root), vec![String::new()]);
    }

    #[test]
    fn test_name_and_extension() {
        let c = ctx();
        assert_eq!(resolve_values(&ConditionSource::Name, "", &c), vec!["Plan.md", "Plan"]);
        assert_eq!(resolve_values(&ConditionSource::Extension, "", &c), vec!["md"]);
    }

    #[test]
    fn test_frontmatter_scalars_and_arrays() {
        let c = ctx();
        assert_eq!(resolve_values(&ConditionSource::Frontmatter, "status", &c), vec!["active"]);
        assert_eq!(
            resolve_values(&ConditionSource::Frontmatter, "ALIASES", &c),
            vec!["one", "two", "3", "true"]
        );
        assert_eq!(resolve_values(&ConditionSource::Frontmatter, "meta", &c), vec![r#"{"k":"v"}"#]);
    }

    #[test]
    fn test_frontmatter_blank_or_missing_field() {
        let c = ctx();
        assert!(resolve_values(&ConditionSource::Frontmatter, "", &c).is_empty());
        assert!(resolve_values(&ConditionSource::Frontmatter, "nope", &c).is_empty());
    }

    #[test]
    fn test_tags_union_normalized_dedup() {
        let values = resolve_values(&ConditionSource::Tag, "", &ctx());
        assert_eq!(values, vec!["work", "alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_no_tags_is_empty() {
        let bare = RuleEvaluationContext::builder("a.md").build();
        assert!(resolve_values(&ConditionSource::Tag, "", &bare).is_empty());
    }

    #[test]
    fn test_body_present_and_absent() {
        let with_body = RuleEvaluationContext::builder("a.md").body("hello").build();
        assert_eq!(resolve_values(&ConditionSource::Body, "", &with_body), vec!["hello"]);
        assert!(resolve_values(&ConditionSource::Body, "", &ctx()).is_empty());
    }

    #[test]
    fn test_backlinks_all_and_keyed() {
        let c = ctx();
        assert_eq!(
            resolve_values(&ConditionSource::Backlink, "", &c),
            vec!["Index.md", "Index", "Areas/Clients.md", "Clients"]
        );
        assert_eq!(
            resolve_values(&ConditionSource::Backlink, "client", &c),
            vec!["Areas/Clients.md", "Clients"]
        );
        assert!(resolve_values(&ConditionSource::Backlink, "project", &c).is_empty());
    }

    #[test]
    fn test_file_dates_formatted_local() {
        let created = Local.with_ymd_and_hms(2026, 2, 1, 9, 15, 0).unwrap().with_timezone(&Utc);
        let c = RuleEvaluationContext::builder("a.md").created(created).build();
        assert_eq!(
            resolve_values(&ConditionSource::DateCreated, "", &c),
            vec!["2026-02-01T09:15:00"]
        );
        assert!(resolve_values(&ConditionSource::DateModified, "", &c).is_empty());
    }

    #[test]
    fn test_unrecognized_source() {
        let source = ConditionSource::Unrecognized("vault".into());
        assert!(resolve_values(&source, "x", &ctx()).is_empty());
    }

    #[test]
    fn test_basename_of() {
        assert_eq!(basename_of("a/b/Note.md"), "Note");
        assert_eq!(basename_of("Note"), "Note");
        assert_eq!(basename_of(".hidden"), ".hidden");
    }
}
