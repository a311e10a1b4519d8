//! Condition and group matching
//!
//! Two distinct empty-list policies live here and must not be conflated:
//! - `rule_has_no_conditions` / `has_no_conditions`: a rule or bucket
//!   declaring nothing at all is a catch-all and matches every note.
//! - `matches_group`: an explicit empty list never matches, under either mode.

use crate::context::RuleEvaluationContext;
use crate::engine::operators::{CaseSensitivity, OperatorEvaluator};
use crate::engine::values::{normalize_folder, normalize_tag, resolve_values};
use crate::rules::{
    ConditionGroup, ConditionSource, ConditionalRule, MatchMode, Predicate,
    RuleCondition, SortBucket,
};

/// Evaluates conditions, groups, rules and buckets against a note
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    evaluator: OperatorEvaluator,
}

impl Matcher {
    #[must_use]
    pub const fn new(evaluator: OperatorEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluate a single condition
    #[must_use]
    pub fn matches_condition(&self, condition: &RuleCondition, ctx: &RuleEvaluationContext) -> bool {
        let Some(predicate) = condition.operator.predicate() else {
            tracing::debug!(
                operator = %condition.operator,
                source = %condition.source,
                "unrecognized operator, condition never matches"
            );
            return false;
        };
        if let ConditionSource::Unrecognized(name) = &condition.source {
            tracing::debug!(source = %name, "unrecognized condition source, resolving no values");
        }

        let target = condition.value.trim();

        match predicate {
            Predicate::Exists if target.is_empty() => {
                let present = field_present(condition, ctx);
                present != condition.operator.is_negated()
            }
            Predicate::IsNotEmpty => {
                let values = resolve_values(&condition.source, &condition.field, ctx);
                let non_blank = values.iter().any(|v| !v.trim().is_empty());
                non_blank != condition.operator.is_negated()
            }
            _ => {
                let values = resolve_values(&condition.source, &condition.field, ctx);
                let target = normalize_target(&condition.source, target);
                let case = if condition.source.is_case_sensitive() {
                    CaseSensitivity::Sensitive
                } else {
                    CaseSensitivity::Insensitive
                };
                self.evaluator.matches(&values, &condition.operator, &target, case)
            }
        }
    }

    /// Combine conditions under a match mode; an empty list never matches
    #[must_use]
    pub fn matches_group(
        &self,
        conditions: &[RuleCondition],
        mode: MatchMode,
        ctx: &RuleEvaluationContext,
    ) -> bool {
        if conditions.is_empty() {
            return false;
        }
        match mode {
            MatchMode::All => conditions.iter().all(|c| self.matches_condition(c, ctx)),
            MatchMode::Any => conditions.iter().any(|c| self.matches_condition(c, ctx)),
        }
    }

    /// Evaluate a nested condition group under its own mode
    #[must_use]
    pub fn matches_condition_group(&self, group: &ConditionGroup, ctx: &RuleEvaluationContext) -> bool {
        self.matches_group(&group.conditions, group.match_mode, ctx)
    }

    /// Evaluate a classification rule (ignores `enabled`)
    ///
    /// Structured conditions take precedence; legacy fields are only consulted
    /// when there are none. A rule with neither matches everything.
    #[must_use]
    pub fn matches_rule<R: ConditionalRule + ?Sized>(&self, rule: &R, ctx: &RuleEvaluationContext) -> bool {
        if rule_has_no_conditions(rule) {
            return true;
        }
        if rule.conditions().is_empty() {
            return self.matches_group(&rule.legacy().to_conditions(), MatchMode::All, ctx);
        }
        self.matches_group(rule.conditions(), rule.match_mode(), ctx)
    }

    /// Evaluate a sort bucket's flat conditions and nested groups (ignores `enabled`)
    #[must_use]
    pub fn matches_bucket(&self, bucket: &SortBucket, ctx: &RuleEvaluationContext) -> bool {
        if has_no_conditions(bucket) {
            return true;
        }

        let flat = &bucket.conditions;
        let groups = &bucket.condition_groups;

        match bucket.match_mode {
            MatchMode::All => {
                (flat.is_empty() || self.matches_group(flat, MatchMode::All, ctx))
                    && groups.iter().all(|g| self.matches_condition_group(g, ctx))
            }
            MatchMode::Any => {
                (!flat.is_empty() && self.matches_group(flat, MatchMode::Any, ctx))
                    || groups.iter().any(|g| self.matches_condition_group(g, ctx))
            }
        }
    }
}

/// Whether a rule declares neither structured nor legacy conditions: a catch-all
#[must_use]
pub fn rule_has_no_conditions<R: ConditionalRule + ?Sized>(rule: &R) -> bool {
    rule.conditions().is_empty() && rule.legacy().is_empty()
}

/// Whether a bucket declares no conditions and no groups: a catch-all
#[must_use]
pub fn has_no_conditions(bucket: &SortBucket) -> bool {
    bucket.conditions.is_empty() && bucket.condition_groups.is_empty()
}

/// Presence test for `exists` without a target
fn field_present(condition: &RuleCondition, ctx: &RuleEvaluationContext) -> bool {
    match &condition.source {
        ConditionSource::Frontmatter => {
            !condition.field.trim().is_empty() && ctx.frontmatter.contains_key(&condition.field)
        }
        source => !resolve_values(source, &condition.field, ctx).is_empty(),
    }
}

/// Bring a target into the same shape as the source's values
fn normalize_target(source: &ConditionSource, target: &str) -> String {
    match source {
        ConditionSource::Path => normalize_folder(target),
        ConditionSource::Tag => normalize_tag(target),
        ConditionSource::Extension => target.trim_start_matches('.').to_string(),
        _ => target.to_string(),
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
