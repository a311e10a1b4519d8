//! Unit tests for rule configuration types

use crate::rules::types::{
    ConditionSource, CriterionType, IconColorRule, LegacyCondition, MatchMode,
    MissingValuePlacement, Operator, Predicate, SortBucket, SortDirection, SortSettings,
};

#[test]
fn test_operator_parse_positive() {
    assert_eq!(Operator::from("is"), Operator::Matches(Predicate::Is));
    assert_eq!(Operator::from("within-next-days"), Operator::Matches(Predicate::WithinNextDays));
    assert_eq!(Operator::from(" Contains "), Operator::Matches(Predicate::Contains));
}

#[test]
fn test_operator_parse_negated() {
    assert_eq!(Operator::from("!is-today"), Operator::NotMatches(Predicate::IsToday));
    assert_eq!(
        Operator::from("!has-open-checkboxes"),
        Operator::NotMatches(Predicate::HasOpenCheckboxes)
    );
    assert!(Operator::from("!starts").is_negated());
}

#[test]
fn test_operator_parse_unknown() {
    let op = Operator::from("matches-regex");
    assert!(matches!(op, Operator::Unrecognized(ref s) if s == "matches-regex"));
    assert_eq!(op.predicate(), None);
    assert!(matches!(Operator::from("!bogus"), Operator::Unrecognized(_)));
}

#[test]
fn test_operator_display_roundtrip() {
    for name in ["is", "!is", "exists", "!exists", "is-not-empty", "!is-after-today"] {
        assert_eq!(Operator::from(name).to_string(), name);
    }
}

#[test]
fn test_source_parse() {
    assert_eq!(ConditionSource::from("date-created"), ConditionSource::DateCreated);
    assert_eq!(ConditionSource::from("Backlink"), ConditionSource::Backlink);
    assert!(matches!(ConditionSource::from("vault"), ConditionSource::Unrecognized(_)));
    assert!(ConditionSource::Path.is_case_sensitive());
    assert!(!ConditionSource::Tag.is_case_sensitive());
}

#[test]
fn test_legacy_property_defaults_operator() {
    let legacy = LegacyCondition {
        property: "status".into(),
        ..Default::default()
    };
    let conditions = legacy.to_conditions();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].operator, Operator::Matches(Predicate::Exists));

    let legacy = LegacyCondition {
        property: "status".into(),
        value: "done".into(),
        ..Default::default()
    };
    assert_eq!(legacy.to_conditions()[0].operator, Operator::Matches(Predicate::Is));
}

#[test]
fn test_legacy_path_prefix_and_property() {
    let legacy = LegacyCondition {
        property: "status".into(),
        operator: "!is".into(),
        value: "done".into(),
        path_prefix: "Projects".into(),
    };
    let conditions = legacy.to_conditions();
    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions[0].source, ConditionSource::Path);
    assert_eq!(conditions[0].operator, Operator::Matches(Predicate::Starts));
    assert_eq!(conditions[1].operator, Operator::NotMatches(Predicate::Is));
}

#[test]
fn test_legacy_empty() {
    assert!(LegacyCondition::default().is_empty());
    assert!(LegacyCondition::default().to_conditions().is_empty());
}

#[test]
fn test_rule_deserialize_with_defaults() {
    let json = r#"{
        "id": "r1",
        "conditions": [{"source": "tag", "operator": "contains", "value": "work"}],
        "icon": "briefcase"
    }"#;
    let rule: IconColorRule = serde_json::from_str(json).unwrap();
    assert!(rule.enabled);
    assert_eq!(rule.match_mode, MatchMode::All);
    assert_eq!(rule.conditions[0].source, ConditionSource::Tag);
    assert_eq!(rule.icon.as_deref(), Some("briefcase"));
    assert!(rule.color.is_none());
    assert!(rule.legacy.is_empty());
}

#[test]
fn test_rule_deserialize_legacy_fields() {
    let json = r#"{"id": "old", "property": "type", "value": "project", "path_prefix": "Work", "color": "blue"}"#;
    let rule: IconColorRule = serde_json::from_str(json).unwrap();
    assert!(rule.conditions.is_empty());
    assert_eq!(rule.legacy.property, "type");
    assert_eq!(rule.legacy.path_prefix, "Work");
}

#[test]
fn test_rule_deserialize_unknown_operator_does_not_fail() {
    let json = r#"{"id": "x", "conditions": [{"source": "galaxy", "operator": "orbits", "value": "sun"}]}"#;
    let rule: IconColorRule = serde_json::from_str(json).unwrap();
    assert!(matches!(rule.conditions[0].source, ConditionSource::Unrecognized(_)));
    assert!(matches!(rule.conditions[0].operator, Operator::Unrecognized(_)));
}

#[test]
fn test_sort_settings_deserialize() {
    let json = r#"{
        "append_basename": true,
        "buckets": [{
            "match": "any",
            "conditions": [{"source": "path", "operator": "contains", "value": "Inbox"}],
            "sort_criteria": [
                {"field": "due", "type": "date", "direction": "desc", "missing_value_placement": "first"}
            ]
        }]
    }"#;
    let settings: SortSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.separator, "_");
    assert!(settings.bucket_index_prefix);
    let bucket = &settings.buckets[0];
    assert!(bucket.enabled);
    assert_eq!(bucket.match_mode, MatchMode::Any);
    let criteria = &bucket.sort_criteria[0];
    assert_eq!(criteria.source, ConditionSource::Frontmatter);
    assert_eq!(criteria.kind, Some(CriterionType::Date));
    assert_eq!(criteria.direction, SortDirection::Desc);
    assert_eq!(criteria.missing_value_placement, MissingValuePlacement::First);
}

#[test]
fn test_bucket_default_is_catch_all() {
    let bucket = SortBucket::new();
    assert!(bucket.enabled);
    assert!(bucket.conditions.is_empty());
    assert!(bucket.condition_groups.is_empty());
}

#[test]
fn test_rule_deserialize_camel_case_legacy_fields() {
    let json = r#"{"id": "projects", "pathPrefix": "Projects", "property": "status", "icon": "folder"}"#;
    let rule: IconColorRule = serde_json::from_str(json).unwrap();
    assert_eq!(rule.legacy.path_prefix, "Projects");
    assert_eq!(rule.legacy.property, "status");
    assert!(!rule.legacy.is_empty());
}

#[test]
fn test_sort_settings_deserialize_camel_case() {
    let json = r#"{
        "separator": "|",
        "appendBasename": true,
        "bucketIndexPrefix": false,
        "buckets": [{
            "id": "inbox",
            "match": "all",
            "conditionGroups": [
                {"match": "any", "conditions": [{"source": "tag", "operator": "is", "value": "todo"}]}
            ],
            "sortCriteria": [
                {"field": "priority", "missingValuePlacement": "first",
                 "mappings": [{"input": "high", "output": "1"}]}
            ]
        }]
    }"#;
    let settings: SortSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.separator, "|");
    assert!(settings.append_basename);
    assert!(!settings.bucket_index_prefix);

    let bucket = &settings.buckets[0];
    assert_eq!(bucket.id.as_deref(), Some("inbox"));
    assert_eq!(bucket.condition_groups.len(), 1);
    assert_eq!(bucket.condition_groups[0].match_mode, MatchMode::Any);
    assert_eq!(bucket.condition_groups[0].conditions[0].source, ConditionSource::Tag);

    let criteria = &bucket.sort_criteria[0];
    assert_eq!(criteria.field, "priority");
    assert_eq!(criteria.missing_value_placement, MissingValuePlacement::First);
    assert_eq!(criteria.mappings[0].input, "high");
    assert_eq!(criteria.mappings[0].output, "1");
}
