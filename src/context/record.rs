//! Serializable note descriptors
//!
//! `DocumentRecord` is the JSON shape an indexing layer hands over for one
//! note. It converts into a `RuleEvaluationContext`.

use super::{Backlink, FileInfo, FrontmatterIndex, RuleEvaluationContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A backlink as written in a note descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BacklinkRecord {
    /// Bare source path
    Path(String),
    /// Source path with the frontmatter key that declared the link
    Keyed {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
}

impl From<BacklinkRecord> for Backlink {
    fn from(record: BacklinkRecord) -> Self {
        match record {
            BacklinkRecord::Path(source) => Self::new(source),
            BacklinkRecord::Keyed { source, key } => Self {
                source,
                via_key: key.filter(|k| !k.trim().is_empty()),
            },
        }
    }
}

/// Note descriptor as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default)]
    pub frontmatter: Map<String, Value>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub backlinks: Vec<BacklinkRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl From<DocumentRecord> for RuleEvaluationContext {
    fn from(record: DocumentRecord) -> Self {
        let mut file = FileInfo::from_path(record.path);
        file.created = record.created;
        file.modified = record.modified;

        Self {
            file,
            frontmatter: FrontmatterIndex::new(record.frontmatter),
            tags: record.tags,
            backlinks: record.backlinks.into_iter().map(Backlink::from).collect(),
            body: record.body,
        }
    }
}

/// Parse one record or an array of records from JSON text
///
/// # Errors
///
/// Returns `serde_json::Error` if the text is neither a record nor an array
/// of records.
pub fn parse_records(json: &str) -> Result<Vec<DocumentRecord>, serde_json::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<DocumentRecord>),
        One(Box<DocumentRecord>),
    }

    Ok(match serde_json::from_str(json)? {
        OneOrMany::Many(records) => records,
        OneOrMany::One(record) => vec![*record],
    })
}
