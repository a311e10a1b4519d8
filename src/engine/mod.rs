//! Rule evaluation
//!
//! The engine is a pure function of `(rules, context, clock)`: it borrows
//! configuration and contexts immutably, performs no I/O and never fails.
//! Malformed configuration (unknown operators or sources, unparseable dates)
//! resolves to "no match" or "no value" instead of an error.
//!
//! # Examples
//!
//! ```
//! use notesort::context::RuleEvaluationContext;
//! use notesort::engine::{Clock, RuleEngine};
//! use notesort::rules::{IconColorRule, RuleCondition};
//! use serde_json::json;
//!
//! let engine = RuleEngine::new(Clock::system());
//! let rules = vec![
//!     IconColorRule::new("urgent")
//!         .with_condition(RuleCondition::frontmatter("priority", "is", "high"))
//!         .with_icon("alert")
//!         .with_color("red"),
//! ];
//! let ctx = RuleEvaluationContext::builder("Tasks/Call.md")
//!     .frontmatter_entry("priority", json!("High"))
//!     .build();
//!
//! let visual = engine.resolve_visual(&rules, &ctx);
//! assert_eq!(visual.icon.value.as_deref(), Some("alert"));
//! assert_eq!(visual.color.rule_id.as_deref(), Some("urgent"));
//! ```

pub mod clock;
pub mod dates;
pub mod matcher;
pub mod operators;
pub mod sort_key;
pub mod values;
pub mod visual;

pub use clock::Clock;
pub use matcher::{Matcher, has_no_conditions, rule_has_no_conditions};
pub use operators::{CaseSensitivity, OperatorEvaluator};
pub use sort_key::{UNMATCHED_BUCKET, compare_sort_keys};
pub use values::resolve_values;
pub use visual::{ChannelMatch, VisualRuleResult};

use crate::context::RuleEvaluationContext;
use crate::rules::{HideRule, IconColorRule, MatchMode, RuleCondition, SortSettings};

/// Entry point bundling a clock with every evaluation operation
///
/// Holds no mutable state; share one instance across threads for a batch.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    matcher: Matcher,
}

impl RuleEngine {
    #[must_use]
    pub const fn new(clock: Clock) -> Self {
        Self {
            matcher: Matcher::new(OperatorEvaluator::new(clock)),
        }
    }

    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Icon and color for a note, first match per channel
    #[must_use]
    pub fn resolve_visual(
        &self,
        rules: &[IconColorRule],
        ctx: &RuleEvaluationContext,
    ) -> VisualRuleResult {
        visual::resolve_visual_outputs(rules, ctx, &self.matcher)
    }

    /// Id of the first enabled hide rule matching the note
    #[must_use]
    pub fn resolve_hidden<'a>(
        &self,
        rules: &'a [HideRule],
        ctx: &RuleEvaluationContext,
    ) -> Option<&'a str> {
        visual::resolve_hidden(rules, ctx, &self.matcher)
    }

    #[must_use]
    pub fn compose_sort_key(&self, settings: &SortSettings, ctx: &RuleEvaluationContext) -> String {
        sort_key::compose_sort_key(settings, ctx, &self.matcher)
    }

    /// `(input index, key)` pairs in ascending key order
    #[must_use]
    pub fn order_documents(
        &self,
        settings: &SortSettings,
        contexts: &[RuleEvaluationContext],
    ) -> Vec<(usize, String)> {
        sort_key::order_documents(settings, contexts, &self.matcher)
    }

    #[must_use]
    pub fn matches_condition(&self, condition: &RuleCondition, ctx: &RuleEvaluationContext) -> bool {
        self.matcher.matches_condition(condition, ctx)
    }

    /// An empty list never matches
    #[must_use]
    pub fn matches_group(
        &self,
        conditions: &[RuleCondition],
        mode: MatchMode,
        ctx: &RuleEvaluationContext,
    ) -> bool {
        self.matcher.matches_group(conditions, mode, ctx)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(Clock::system())
    }
}
