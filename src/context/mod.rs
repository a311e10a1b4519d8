//! The note under evaluation
//!
//! A `RuleEvaluationContext` carries everything the engine may look at for one
//! note: file facts, frontmatter, tags, backlinks and (optionally) body text.
//! Callers assemble one per note from whatever metadata layer they have; the
//! engine only borrows it.
//!
//! # Examples
//!
//! ```
//! use notesort::context::RuleEvaluationContext;
//! use serde_json::json;
//!
//! let ctx = RuleEvaluationContext::builder("Projects/Alpha.md")
//!     .frontmatter_entry("Status", json!("active"))
//!     .tag("#work")
//!     .build();
//!
//! assert_eq!(ctx.file.basename, "Alpha");
//! assert!(ctx.frontmatter.get("status").is_some());
//! ```

mod frontmatter;
mod record;

pub use frontmatter::FrontmatterIndex;
pub use record::{BacklinkRecord, DocumentRecord, parse_records};

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;

/// File facts for the note
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileInfo {
    /// Vault-relative path with `/` separators
    pub path: String,
    /// Filename including extension
    pub name: String,
    /// Filename without extension
    pub basename: String,
    /// Extension without the leading dot
    pub extension: String,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl FileInfo {
    /// Derive name, basename and extension from a path
    #[must_use]
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into().replace('\\', "/");
        let as_path = Path::new(&path);

        let name = as_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let basename = as_path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let extension = as_path
            .extension()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        Self {
            path,
            name,
            basename,
            extension,
            created: None,
            modified: None,
        }
    }
}

/// A note linking to the note under evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlink {
    /// Path of the linking note
    pub source: String,
    /// Frontmatter key the link was declared under, if any
    pub via_key: Option<String>,
}

impl Backlink {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            via_key: None,
        }
    }

    #[must_use]
    pub fn via(source: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            via_key: Some(key.into()),
        }
    }
}

/// Everything the engine may inspect for one note
#[derive(Debug, Clone, Default)]
pub struct RuleEvaluationContext {
    pub file: FileInfo,
    pub frontmatter: FrontmatterIndex,
    pub tags: Vec<String>,
    pub backlinks: Vec<Backlink>,
    pub body: Option<String>,
}

impl RuleEvaluationContext {
    /// Start building a context for the note at `path`
    #[must_use]
    pub fn builder(path: impl Into<String>) -> ContextBuilder {
        ContextBuilder::new(path)
    }
}

/// Builder for `RuleEvaluationContext`
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    file: FileInfo,
    frontmatter: serde_json::Map<String, Value>,
    tags: Vec<String>,
    backlinks: Vec<Backlink>,
    body: Option<String>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            file: FileInfo::from_path(path),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn created(mut self, at: DateTime<Utc>) -> Self {
        self.file.created = Some(at);
        self
    }

    #[must_use]
    pub const fn modified(mut self, at: DateTime<Utc>) -> Self {
        self.file.modified = Some(at);
        self
    }

    /// Replace the whole frontmatter map
    #[must_use]
    pub fn frontmatter(mut self, map: serde_json::Map<String, Value>) -> Self {
        self.frontmatter = map;
        self
    }

    /// Add a single frontmatter entry
    #[must_use]
    pub fn frontmatter_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.frontmatter.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn backlink(mut self, backlink: Backlink) -> Self {
        self.backlinks.push(backlink);
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the context, indexing frontmatter keys once
    #[must_use]
    pub fn build(self) -> RuleEvaluationContext {
        RuleEvaluationContext {
            file: self.file,
            frontmatter: FrontmatterIndex::new(self.frontmatter),
            tags: self.tags,
            backlinks: self.backlinks,
            body: self.body,
        }
    }
}
