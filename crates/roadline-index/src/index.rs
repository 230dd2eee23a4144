use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use roadline_types::{Cid, RecordCategory};

/// The in-memory index: per category, the ordered list of identifiers this
/// service has issued.
///
/// Append-only, no deletion, no deduplication. Storing the same record twice
/// issues the same identifier twice and both appends are kept: the list is a
/// log of issuance, not a set. Its only query is membership ("did this
/// service issue that identifier for that category?").
///
/// Serializes transparently as a category-keyed JSON object, e.g.
/// `{"traffic": ["ab…", "cd…"], "accident": []}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CidIndex {
    categories: BTreeMap<RecordCategory, Vec<Cid>>,
}

impl CidIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identifier to a category's list.
    pub fn append(&mut self, category: RecordCategory, cid: Cid) {
        self.categories.entry(category).or_default().push(cid);
    }

    /// Returns `true` if `cid` was previously issued for `category`.
    pub fn contains(&self, category: RecordCategory, cid: &Cid) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|cids| cids.contains(cid))
    }

    /// The ordered identifier list for a category (empty if none issued).
    pub fn cids(&self, category: RecordCategory) -> &[Cid] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of identifiers issued for a category.
    pub fn len(&self, category: RecordCategory) -> usize {
        self.cids(category).len()
    }

    /// Returns `true` if no identifiers have been issued at all.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }
}
