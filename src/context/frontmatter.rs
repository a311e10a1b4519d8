use serde_json::{Map, Value};
use std::collections::HashMap;

/// Frontmatter with a case-insensitive key index
///
/// The lower-cased index is built once on construction, so repeated lookups
/// across many conditions don't rescan the map. When two keys differ only by
/// case, the first one in map order wins.
#[derive(Debug, Clone, Default)]
pub struct FrontmatterIndex {
    entries: Map<String, Value>,
    index: HashMap<String, String>,
}

impl FrontmatterIndex {
    #[must_use]
    pub fn new(entries: Map<String, Value>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for key in entries.keys() {
            index
                .entry(key.trim().to_lowercase())
                .or_insert_with(|| key.clone());
        }
        Self { entries, index }
    }

    /// Look up a value by key, ignoring case
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let original = self.index.get(&key.trim().to_lowercase())?;
        self.entries.get(original)
    }

    /// Whether the key is present (even with a null or empty value)
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&key.trim().to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The original map, keys as written
    #[must_use]
    pub const fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl From<Map<String, Value>> for FrontmatterIndex {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}
