use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use roadline_index::IndexFile;
use roadline_ledger::{FileLedger, Ledger};
use roadline_store::{BlobStore, FsBlobStore};
use roadline_types::{Cid, RecordCategory};

use crate::error::{SdkError, SdkResult};
use crate::record::has_content;

/// Name of the index document inside a data directory.
const INDEX_FILE: &str = "cids.json";
/// Name of the ledger document inside a data directory.
const LEDGER_FILE: &str = "ledger.json";

/// The composed roadline stack: blob store + issued-identifier index +
/// latest-identifier ledger.
pub struct Roadline {
    store: Arc<dyn BlobStore>,
    index: IndexFile,
    ledger: Arc<dyn Ledger>,
}

impl Roadline {
    /// Open the filesystem-backed stack under `data_dir` (created if
    /// missing): blockstore in `objects/`, index in `cids.json`, ledger
    /// slots in `ledger.json`.
    pub fn open(data_dir: impl AsRef<Path>) -> SdkResult<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(roadline_store::StoreError::Io)?;

        let store = FsBlobStore::open(data_dir)?;
        let index = IndexFile::open(data_dir.join(INDEX_FILE))?;
        let ledger = FileLedger::open(data_dir.join(LEDGER_FILE))?;

        Ok(Self {
            store: Arc::new(store),
            index,
            ledger: Arc::new(ledger),
        })
    }

    /// Compose a stack from explicit parts (embedding and tests).
    pub fn new(store: Arc<dyn BlobStore>, index: IndexFile, ledger: Arc<dyn Ledger>) -> Self {
        Self {
            store,
            index,
            ledger,
        }
    }

    /// Persist a JSON record and index its identifier under `category`.
    ///
    /// Rejects contentless records ([`has_content`]). The identifier is
    /// appended to the index even if the same content was stored before:
    /// the index is an issuance log, not a set.
    pub fn store_record(&self, category: RecordCategory, record: &Value) -> SdkResult<Cid> {
        if !has_content(record) {
            return Err(SdkError::EmptyRecord);
        }

        let bytes =
            serde_json::to_vec(record).map_err(|e| SdkError::InvalidRecord(e.to_string()))?;
        let cid = self.store.put(&bytes)?;
        self.index.append(category, cid)?;
        Ok(cid)
    }

    /// Serve back a record previously issued for `category`.
    ///
    /// The identifier must appear in the category's index. Identifiers this
    /// service never issued are unknown even if the blob store happens to
    /// hold matching bytes.
    pub fn retrieve_record(&self, category: RecordCategory, cid: &Cid) -> SdkResult<Value> {
        if !self.index.contains(category, cid)? {
            return Err(SdkError::UnknownCid);
        }

        let bytes = self
            .store
            .get(cid)?
            .ok_or(SdkError::ContentUnavailable)?;
        serde_json::from_slice(&bytes).map_err(|e| SdkError::InvalidRecord(e.to_string()))
    }

    /// Record `cid` as the latest anchored identifier for `category`.
    pub fn anchor(&self, category: RecordCategory, cid: &str) -> SdkResult<()> {
        self.ledger.record(category, cid)?;
        Ok(())
    }

    /// The latest anchored identifier for `category`, if any.
    pub fn latest_anchor(&self, category: RecordCategory) -> SdkResult<Option<String>> {
        Ok(self.ledger.latest(category)?)
    }

    /// The ordered identifier list issued for `category`.
    pub fn issued(&self, category: RecordCategory) -> SdkResult<Vec<Cid>> {
        Ok(self.index.cids(category)?)
    }
}

impl std::fmt::Debug for Roadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roadline")
            .field("index", &self.index)
            .finish()
    }
}
