//! Unit tests for operator evaluation

use super::{CaseSensitivity, OperatorEvaluator, parse_day_count};
use crate::rules::Operator;
use crate::testing::{day_offset, fixed_clock, values};

fn eval() -> OperatorEvaluator {
    OperatorEvaluator::new(fixed_clock())
}

fn check(vals: &[&str], op: &str, target: &str) -> bool {
    eval().matches(&values(vals), &Operator::from(op), target, CaseSensitivity::Insensitive)
}

#[test]
fn test_is_case_insensitive() {
    assert!(check(&["High"], "is", "high"));
    assert!(check(&["low", " HIGH "], "is", "high"));
    assert!(!check(&["higher"], "is", "high"));
}

#[test]
fn test_case_sensitive_mode() {
    let vals = values(&["Projects/Alpha"]);
    let op = Operator::from("starts");
    assert!(eval().matches(&vals, &op, "Projects", CaseSensitivity::Sensitive));
    assert!(!eval().matches(&vals, &op, "projects", CaseSensitivity::Sensitive));
}

#[test]
fn test_contains_and_starts() {
    assert!(check(&["Weekly Review"], "contains", "review"));
    assert!(check(&["Weekly Review"], "starts", "week"));
    assert!(!check(&["Weekly Review"], "starts", "review"));
}

#[test]
fn test_negation_is_exact_complement() {
    let cases: &[(&[&str], &str)] = &[
        (&["alpha", "beta"], "alpha"),
        (&["alpha", "beta"], "gamma"),
        (&["alpha beta"], "beta"),
        (&["Alpha"], "al"),
        (&[], "x"),
    ];
    for (vals, target) in cases {
        for op in ["is", "contains", "starts", "exists", "is-today", "within-next-days"] {
            let positive = check(vals, op, target);
            let negative = check(vals, &format!("!{op}"), target);
            assert_ne!(positive, negative, "{op} over {vals:?} with {target}");
        }
    }
}

#[test]
fn test_not_is_means_no_value_equals() {
    assert!(check(&["a", "b"], "!is", "c"));
    assert!(!check(&["a", "b"], "!is", "b"));
}

#[test]
fn test_exists_with_and_without_target() {
    assert!(check(&["something"], "exists", ""));
    assert!(!check(&[], "exists", ""));
    assert!(check(&[], "!exists", ""));
    assert!(check(&["a note about cats"], "exists", "cats"));
    assert!(check(&["a note about cats"], "!exists", "dogs"));
}

#[test]
fn test_is_not_empty() {
    assert!(check(&["", "x"], "is-not-empty", ""));
    assert!(!check(&["", "   "], "is-not-empty", ""));
    assert!(!check(&[], "is-not-empty", ""));
}

#[test]
fn test_within_next_days_window() {
    let in_three = day_offset(3);
    let in_ten = day_offset(10);
    assert!(check(&[&in_three], "within-next-days", "7"));
    assert!(!check(&[&in_ten], "within-next-days", "7"));
    assert!(!check(&[&in_three], "!within-next-days", "7"));
    assert!(check(&[&in_ten], "!within-next-days", "7"));
}

#[test]
fn test_within_next_days_boundaries() {
    assert!(check(&[&day_offset(0)], "within-next-days", "7"));
    assert!(check(&[&day_offset(7)], "within-next-days", "7"));
    assert!(!check(&[&day_offset(8)], "within-next-days", "7"));
    assert!(!check(&[&day_offset(-1)], "within-next-days", "7"));
    assert!(check(&[&day_offset(0)], "within-next-days", "-5"));
}

#[test]
fn test_within_next_days_skips_unparseable() {
    let soon = day_offset(2);
    assert!(check(&["not a date", &soon], "within-next-days", "3"));
    assert!(!check(&["not a date"], "within-next-days", "3"));
}

#[test]
fn test_parse_day_count() {
    assert_eq!(parse_day_count("7"), 7);
    assert_eq!(parse_day_count(" 2.9 "), 2);
    assert_eq!(parse_day_count("-3"), 0);
    assert_eq!(parse_day_count("soon"), 0);
    assert_eq!(parse_day_count(""), 0);
}

#[test]
fn test_has_open_checkboxes() {
    let body = "# Tasks\n- [x] done\n  - [ ] nested open\n";
    assert!(check(&[body], "has-open-checkboxes", ""));
    assert!(check(&["1. [ ] numbered"], "has-open-checkboxes", ""));
    assert!(!check(&["- [x] done\n* [X] also done"], "has-open-checkboxes", ""));
    assert!(!check(&["text with - [ ] inline"], "has-open-checkboxes", ""));
    assert!(check(&["- [x] done"], "!has-open-checkboxes", ""));
}

#[test]
fn test_is_today_parsed_and_substring_fallback() {
    let today = day_offset(0);
    assert!(check(&[&today], "is-today", ""));
    assert!(check(&[&format!("{today}T08:15")], "is-today", ""));
    assert!(check(&[&format!("{today} Daily Note")], "is-today", ""));
    assert!(!check(&[&day_offset(1)], "is-today", ""));
    assert!(check(&[&day_offset(1)], "!is-today", ""));
}

#[test]
fn test_before_and_after_today() {
    assert!(check(&[&day_offset(-1)], "is-before-today", ""));
    assert!(!check(&[&day_offset(0)], "is-before-today", ""));
    assert!(check(&[&day_offset(1)], "is-after-today", ""));
    assert!(!check(&[&day_offset(0)], "is-after-today", ""));
    assert!(check(&[&day_offset(0)], "!is-after-today", ""));
    assert!(!check(&["garbage"], "is-before-today", ""));
}

#[test]
fn test_unrecognized_operator_never_matches() {
    assert!(!check(&["x"], "regex", "x"));
    assert!(!check(&["x"], "!regex", "y"));
}
