//! Rule configuration data structures
//!
//! This module defines the read-only configuration the engine evaluates:
//! - `RuleCondition`: a single source/operator/value test
//! - `ConditionGroup`: a nested list of conditions with its own match mode
//! - `IconColorRule` / `HideRule`: classification rules
//! - `SortSettings` / `SortBucket` / `SortCriteria`: sort key composition
//!
//! Every optional field has a serde default so partial host settings
//! deserialize cleanly. Unknown sources and operators deserialize into an
//! `Unrecognized` variant instead of failing, and never match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a condition reads its values from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ConditionSource {
    /// A frontmatter field, selected by `field`
    #[default]
    Frontmatter,
    /// The note's tags (context tags plus the `tags` frontmatter value)
    Tag,
    /// The folder portion of the note's path
    Path,
    /// The file extension
    Extension,
    /// The filename and basename
    Name,
    /// The raw body text
    Body,
    /// Paths of notes linking here, optionally scoped by `field`
    Backlink,
    /// Creation timestamp
    DateCreated,
    /// Modification timestamp
    DateModified,
    /// A source name this version does not understand
    Unrecognized(String),
}

impl ConditionSource {
    /// The configuration name of this source
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Frontmatter => "frontmatter",
            Self::Tag => "tag",
            Self::Path => "path",
            Self::Extension => "extension",
            Self::Name => "name",
            Self::Body => "body",
            Self::Backlink => "backlink",
            Self::DateCreated => "date-created",
            Self::DateModified => "date-modified",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Whether this source carries a timestamp
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::DateCreated | Self::DateModified)
    }

    /// Whether values from this source compare case-sensitively
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        matches!(self, Self::Path)
    }
}

impl From<&str> for ConditionSource {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "frontmatter" | "property" => Self::Frontmatter,
            "tag" | "tags" => Self::Tag,
            "path" | "folder" => Self::Path,
            "extension" | "ext" => Self::Extension,
            "name" | "filename" => Self::Name,
            "body" | "content" => Self::Body,
            "backlink" | "backlinks" => Self::Backlink,
            "date-created" | "created" => Self::DateCreated,
            "date-modified" | "modified" => Self::DateModified,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for ConditionSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ConditionSource> for String {
    fn from(source: ConditionSource) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for ConditionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The positive test an operator performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Is,
    Contains,
    Starts,
    Exists,
    IsNotEmpty,
    WithinNextDays,
    HasOpenCheckboxes,
    IsToday,
    IsBeforeToday,
    IsAfterToday,
}

impl Predicate {
    /// The configuration name of this predicate (without negation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::Contains => "contains",
            Self::Starts => "starts",
            Self::Exists => "exists",
            Self::IsNotEmpty => "is-not-empty",
            Self::WithinNextDays => "within-next-days",
            Self::HasOpenCheckboxes => "has-open-checkboxes",
            Self::IsToday => "is-today",
            Self::IsBeforeToday => "is-before-today",
            Self::IsAfterToday => "is-after-today",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "is" | "equals" => Some(Self::Is),
            "contains" => Some(Self::Contains),
            "starts" | "starts-with" => Some(Self::Starts),
            "exists" => Some(Self::Exists),
            "is-not-empty" => Some(Self::IsNotEmpty),
            "within-next-days" => Some(Self::WithinNextDays),
            "has-open-checkboxes" => Some(Self::HasOpenCheckboxes),
            "is-today" => Some(Self::IsToday),
            "is-before-today" => Some(Self::IsBeforeToday),
            "is-after-today" => Some(Self::IsAfterToday),
            _ => None,
        }
    }
}

/// A condition operator: a predicate, its negation, or an unknown name
///
/// Parsed from strings like `"contains"` or `"!is-today"`; a leading `!`
/// negates the predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Matches(Predicate),
    NotMatches(Predicate),
    Unrecognized(String),
}

impl Default for Operator {
    fn default() -> Self {
        Self::Matches(Predicate::Is)
    }
}

impl Operator {
    /// The underlying predicate, if the operator is recognized
    #[must_use]
    pub const fn predicate(&self) -> Option<Predicate> {
        match self {
            Self::Matches(p) | Self::NotMatches(p) => Some(*p),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether the operator negates its predicate
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::NotMatches(_))
    }
}

impl From<&str> for Operator {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        let (negated, name) = match normalized.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, normalized.as_str()),
        };

        match (Predicate::parse(name), negated) {
            (Some(p), false) => Self::Matches(p),
            (Some(p), true) => Self::NotMatches(p),
            (None, _) => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matches(p) => f.write_str(p.as_str()),
            Self::NotMatches(p) => write!(f, "!{}", p.as_str()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// How to combine multiple conditions (ALL = AND, ANY = OR)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every condition must match (AND logic)
    #[default]
    All,
    /// At least one condition must match (OR logic)
    Any,
}

/// A single test against one value source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RuleCondition {
    #[serde(default)]
    pub source: ConditionSource,

    /// Frontmatter key, or the link key for backlink conditions
    #[serde(default)]
    pub field: String,

    #[serde(default)]
    pub operator: Operator,

    #[serde(default)]
    pub value: String,
}

impl RuleCondition {
    #[must_use]
    pub fn new(
        source: ConditionSource,
        field: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source,
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a frontmatter condition
    #[must_use]
    pub fn frontmatter(field: &str, operator: &str, value: &str) -> Self {
        Self::new(ConditionSource::Frontmatter, field, operator, value)
    }
}

/// A nested list of conditions with its own match mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConditionGroup {
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,
}

/// Legacy single-condition fields predating structured conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LegacyCondition {
    /// Frontmatter key to test
    #[serde(default)]
    pub property: String,

    /// Operator name; blank means `exists` without a value, `is` otherwise
    #[serde(default)]
    pub operator: String,

    #[serde(default)]
    pub value: String,

    /// Folder prefix the note path must start with
    #[serde(default, alias = "pathPrefix")]
    pub path_prefix: String,
}

impl LegacyCondition {
    /// Whether no legacy field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.property.trim().is_empty() && self.path_prefix.trim().is_empty()
    }

    /// Expand the legacy fields into equivalent structured conditions
    #[must_use]
    pub fn to_conditions(&self) -> Vec<RuleCondition> {
        let mut conditions = Vec::new();

        let prefix = self.path_prefix.trim();
        if !prefix.is_empty() {
            conditions.push(RuleCondition::new(
                ConditionSource::Path,
                "",
                Operator::Matches(Predicate::Starts),
                prefix,
            ));
        }

        let property = self.property.trim();
        if !property.is_empty() {
            let operator = match (self.operator.trim(), self.value.trim().is_empty()) {
                ("", true) => Operator::Matches(Predicate::Exists),
                ("", false) => Operator::Matches(Predicate::Is),
                (op, _) => Operator::from(op),
            };
            conditions.push(RuleCondition::new(
                ConditionSource::Frontmatter,
                property,
                operator,
                self.value.trim(),
            ));
        }

        conditions
    }
}

/// Rule assigning an icon and/or a color to matching notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconColorRule {
    #[serde(default)]
    pub id: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(flatten)]
    pub legacy: LegacyCondition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl IconColorRule {
    /// Create an enabled rule with no conditions, icon or color
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            match_mode: MatchMode::All,
            conditions: Vec::new(),
            legacy: LegacyCondition::default(),
            icon: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub const fn with_match(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Rule hiding matching notes from a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideRule {
    #[serde(default)]
    pub id: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(flatten)]
    pub legacy: LegacyCondition,
}

impl HideRule {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            match_mode: MatchMode::All,
            conditions: Vec::new(),
            legacy: LegacyCondition::default(),
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// Common view over rules that match through conditions
pub trait ConditionalRule {
    fn id(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn match_mode(&self) -> MatchMode;
    fn conditions(&self) -> &[RuleCondition];
    fn legacy(&self) -> &LegacyCondition;
}

impl ConditionalRule for IconColorRule {
    fn id(&self) -> &str {
        &self.id
    }
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
    fn conditions(&self) -> &[RuleCondition] {
        &self.conditions
    }
    fn legacy(&self) -> &LegacyCondition {
        &self.legacy
    }
}

impl ConditionalRule for HideRule {
    fn id(&self) -> &str {
        &self.id
    }
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
    fn conditions(&self) -> &[RuleCondition] {
        &self.conditions
    }
    fn legacy(&self) -> &LegacyCondition {
        &self.legacy
    }
}

const fn default_enabled() -> bool {
    true
}

/// Sort direction of a criterion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Where notes missing a criterion value are placed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePlacement {
    First,
    #[default]
    Last,
}

/// Declared type of a criterion value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CriterionType {
    Date,
    Other(String),
}

impl From<String> for CriterionType {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("date") {
            Self::Date
        } else {
            Self::Other(value)
        }
    }
}

impl From<CriterionType> for String {
    fn from(kind: CriterionType) -> Self {
        match kind {
            CriterionType::Date => "date".to_string(),
            CriterionType::Other(raw) => raw,
        }
    }
}

/// A literal value rewrite, checked case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortValueMapping {
    pub input: String,
    pub output: String,
}

impl SortValueMapping {
    #[must_use]
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// One sort key fragment derived from a value source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortCriteria {
    #[serde(default)]
    pub source: ConditionSource,

    #[serde(default)]
    pub field: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CriterionType>,

    #[serde(default)]
    pub direction: SortDirection,

    #[serde(default)]
    pub mappings: Vec<SortValueMapping>,

    #[serde(default, alias = "missingValuePlacement")]
    pub missing_value_placement: MissingValuePlacement,

    /// Value used when the source yields nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl SortCriteria {
    #[must_use]
    pub fn new(source: ConditionSource, field: impl Into<String>) -> Self {
        Self {
            source,
            field: field.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a frontmatter criterion
    #[must_use]
    pub fn frontmatter(field: &str) -> Self {
        Self::new(ConditionSource::Frontmatter, field)
    }

    #[must_use]
    pub fn with_mapping(mut self, input: &str, output: &str) -> Self {
        self.mappings.push(SortValueMapping::new(input, output));
        self
    }

    #[must_use]
    pub const fn descending(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    #[must_use]
    pub fn as_date(mut self) -> Self {
        self.kind = Some(CriterionType::Date);
        self
    }

    #[must_use]
    pub const fn missing(mut self, placement: MissingValuePlacement) -> Self {
        self.missing_value_placement = placement;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// A priority bucket: conditions selecting notes plus their sort criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    #[serde(default)]
    pub conditions: Vec<RuleCondition>,

    #[serde(default, alias = "conditionGroups")]
    pub condition_groups: Vec<ConditionGroup>,

    #[serde(default, alias = "sortCriteria")]
    pub sort_criteria: Vec<SortCriteria>,
}

impl Default for SortBucket {
    fn default() -> Self {
        Self {
            id: None,
            enabled: true,
            match_mode: MatchMode::All,
            conditions: Vec::new(),
            condition_groups: Vec::new(),
            sort_criteria: Vec::new(),
        }
    }
}

impl SortBucket {
    /// Create an enabled catch-all bucket
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: ConditionGroup) -> Self {
        self.condition_groups.push(group);
        self
    }

    #[must_use]
    pub const fn with_match(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub fn with_criteria(mut self, criteria: SortCriteria) -> Self {
        self.sort_criteria.push(criteria);
        self
    }
}

/// Settings for sort key composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSettings {
    /// Joins key fragments
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Append the note's basename as the last fragment
    #[serde(default, alias = "appendBasename")]
    pub append_basename: bool,

    /// Lead the key with the matched bucket's zero-padded index
    #[serde(default = "default_enabled", alias = "bucketIndexPrefix")]
    pub bucket_index_prefix: bool,

    #[serde(default)]
    pub buckets: Vec<SortBucket>,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            append_basename: false,
            bucket_index_prefix: true,
            buckets: Vec::new(),
        }
    }
}

fn default_separator() -> String {
    "_".to_string()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
