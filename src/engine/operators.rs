//! Operator evaluation over resolved values
//!
//! Every negated operator evaluates its positive predicate over the same
//! values and inverts the result, so `!x` is always the exact complement of
//! `x`. Unrecognized operators never match.

use crate::engine::clock::Clock;
use crate::engine::dates::parse_date_value;
use crate::rules::{Operator, Predicate};
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static OPEN_CHECKBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+[.)])[ \t]+\[ \]").expect("checkbox pattern is valid")
});

/// Whether string comparisons respect case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseSensitivity {
    fn fold(self, value: &str) -> String {
        match self {
            Self::Sensitive => value.trim().to_string(),
            Self::Insensitive => value.trim().to_lowercase(),
        }
    }
}

/// Decides whether values satisfy an operator, relative to a fixed clock
#[derive(Debug, Clone, Copy)]
pub struct OperatorEvaluator {
    clock: Clock,
}

impl OperatorEvaluator {
    #[must_use]
    pub const fn new(clock: Clock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Evaluate `operator` with `target` against the resolved values
    #[must_use]
    pub fn matches(
        &self,
        values: &[String],
        operator: &Operator,
        target: &str,
        case: CaseSensitivity,
    ) -> bool {
        let Some(predicate) = operator.predicate() else {
            return false;
        };
        let positive = self.test(predicate, values, target, case);
        if operator.is_negated() { !positive } else { positive }
    }

    fn test(&self, predicate: Predicate, values: &[String], target: &str, case: CaseSensitivity) -> bool {
        match predicate {
            Predicate::Is => {
                let target = case.fold(target);
                values.iter().any(|v| case.fold(v) == target)
            }
            Predicate::Contains => {
                let target = case.fold(target);
                values.iter().any(|v| case.fold(v).contains(&target))
            }
            Predicate::Starts => {
                let target = case.fold(target);
                values.iter().any(|v| case.fold(v).starts_with(&target))
            }
            Predicate::Exists => {
                let target = case.fold(target);
                if target.is_empty() {
                    !values.is_empty()
                } else {
                    values.iter().any(|v| case.fold(v).contains(&target))
                }
            }
            Predicate::IsNotEmpty => values.iter().any(|v| !v.trim().is_empty()),
            Predicate::WithinNextDays => {
                let today = self.clock.today();
                let last = today
                    .checked_add_signed(Duration::days(parse_day_count(target)))
                    .unwrap_or(NaiveDate::MAX);
                any_date(values, |day| day >= today && day <= last)
            }
            Predicate::HasOpenCheckboxes => values.iter().any(|v| OPEN_CHECKBOX.is_match(v)),
            Predicate::IsToday => {
                let today = self.clock.today();
                let iso = today.format("%Y-%m-%d").to_string();
                values.iter().any(|v| match parse_date_value(v) {
                    Some(at) => at.date_naive() == today,
                    None => v.contains(&iso),
                })
            }
            Predicate::IsBeforeToday => {
                let today = self.clock.today();
                any_date(values, |day| day < today)
            }
            Predicate::IsAfterToday => {
                let today = self.clock.today();
                any_date(values, |day| day > today)
            }
        }
    }
}

/// Whether any value parses to a date whose local day is accepted
fn any_date(values: &[String], accept: impl Fn(NaiveDate) -> bool) -> bool {
    values
        .iter()
        .filter_map(|v| parse_date_value(v))
        .any(|at| accept(at.date_naive()))
}

const MAX_WINDOW_DAYS: i64 = 1_000_000;

/// Parse the day count of `within-next-days`, floored at zero
fn parse_day_count(target: &str) -> i64 {
    let target = target.trim();
    let days = match target.parse::<i64>() {
        Ok(days) => days,
        Err(_) => target
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .map_or(0, |d| d.floor().clamp(0.0, MAX_WINDOW_DAYS as f64) as i64),
    };
    days.clamp(0, MAX_WINDOW_DAYS)
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod operators_tests;
