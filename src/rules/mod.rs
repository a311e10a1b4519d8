//! Rule configuration
//!
//! Classification rules (`IconColorRule`, `HideRule`) and sort configuration
//! (`SortSettings`, `SortBucket`, `SortCriteria`) as loaded from host settings.
//! The engine only reads these; nothing here is mutated during evaluation.
//!
//! # Examples
//!
//! ```
//! use notesort::rules::{IconColorRule, Operator, Predicate, RuleCondition};
//!
//! let rule = IconColorRule::new("urgent")
//!     .with_condition(RuleCondition::frontmatter("priority", "is", "high"))
//!     .with_color("red");
//!
//! assert_eq!(rule.conditions[0].operator, Operator::Matches(Predicate::Is));
//! assert_eq!(Operator::from("!contains"), Operator::NotMatches(Predicate::Contains));
//! ```

pub mod types;

pub use types::{
    ConditionGroup, ConditionSource, ConditionalRule, CriterionType, HideRule, IconColorRule,
    LegacyCondition, MatchMode, MissingValuePlacement, Operator, Predicate, RuleCondition,
    SortBucket, SortCriteria, SortDirection, SortSettings, SortValueMapping,
};
