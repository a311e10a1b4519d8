//! Visual rule resolution
//!
//! Icon and color are independent channels. Rules are visited in order and
//! each channel freezes on the first enabled matching rule that supplies a
//! non-blank value for it, so a later rule can still fill a channel an
//! earlier rule left empty.

use crate::context::RuleEvaluationContext;
use crate::engine::matcher::Matcher;
use crate::rules::{HideRule, IconColorRule};
use serde::Serialize;

/// Outcome of one visual channel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChannelMatch {
    pub matched: bool,
    pub value: Option<String>,
    #[serde(rename = "ruleId")]
    pub rule_id: Option<String>,
}

impl ChannelMatch {
    fn from_hit(hit: Option<(String, String)>) -> Self {
        match hit {
            Some((value, rule_id)) => Self {
                matched: true,
                value: Some(value),
                rule_id: Some(rule_id),
            },
            None => Self::default(),
        }
    }
}

/// Icon and color chosen for a note
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VisualRuleResult {
    pub icon: ChannelMatch,
    pub color: ChannelMatch,
}

/// Non-blank channel value of a rule
fn channel_value(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Resolve the icon and color for a note
#[must_use]
pub fn resolve_visual_outputs(
    rules: &[IconColorRule],
    ctx: &RuleEvaluationContext,
    matcher: &Matcher,
) -> VisualRuleResult {
    let mut icon: Option<(String, String)> = None;
    let mut color: Option<(String, String)> = None;

    for rule in rules.iter().filter(|r| r.enabled) {
        if icon.is_some() && color.is_some() {
            break;
        }

        let wants_icon = icon.is_none() && channel_value(rule.icon.as_ref()).is_some();
        let wants_color = color.is_none() && channel_value(rule.color.as_ref()).is_some();
        if !wants_icon && !wants_color {
            continue;
        }
        if !matcher.matches_rule(rule, ctx) {
            continue;
        }

        tracing::trace!(rule = %rule.id, path = %ctx.file.path, "visual rule matched");

        if wants_icon && let Some(value) = channel_value(rule.icon.as_ref()) {
            icon = Some((value.to_string(), rule.id.clone()));
        }
        if wants_color && let Some(value) = channel_value(rule.color.as_ref()) {
            color = Some((value.to_string(), rule.id.clone()));
        }
    }

    VisualRuleResult {
        icon: ChannelMatch::from_hit(icon),
        color: ChannelMatch::from_hit(color),
    }
}

/// Id of the first enabled hide rule matching the note
#[must_use]
pub fn resolve_hidden<'a>(
    rules: &'a [HideRule],
    ctx: &RuleEvaluationContext,
    matcher: &Matcher,
) -> Option<&'a str> {
    let rule = rules
        .iter()
        .filter(|r| r.enabled)
        .find(|r| matcher.matches_rule(*r, ctx))?;
    tracing::trace!(rule = %rule.id, path = %ctx.file.path, "hide rule matched");
    Some(rule.id.as_str())
}
