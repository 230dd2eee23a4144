//! File persistence for the ledger slots.
//!
//! The slots are a tiny JSON object (`{"traffic": "…", "accident": "…"}`),
//! rewritten on every record. Mutation is serialized behind a mutex with a
//! temp-file-and-rename replace, the same discipline the index file uses.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use roadline_types::RecordCategory;

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{validate_identifier, Ledger};

/// JSON-file-backed ledger. Anchored identifiers survive process restarts.
pub struct FileLedger {
    path: PathBuf,
    inner: Mutex<BTreeMap<RecordCategory, String>>,
}

impl FileLedger {
    /// Open a ledger file, starting with unset slots if the file does not
    /// exist yet. The parent directory must exist.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let slots = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| LedgerError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: Mutex::new(slots),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, slots: &BTreeMap<RecordCategory, String>) -> LedgerResult<()> {
        let json = serde_json::to_vec_pretty(slots)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("tmp");
        {
            let mut tmp = fs::File::create(&tmp_path)?;
            tmp.write_all(&json)?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl Ledger for FileLedger {
    fn record(&self, category: RecordCategory, cid: &str) -> LedgerResult<()> {
        validate_identifier(cid)?;
        let mut guard = self.inner.lock().map_err(|_| LedgerError::LockPoisoned)?;

        let mut updated = guard.clone();
        updated.insert(category, cid.to_string());
        self.persist(&updated)?;

        *guard = updated;
        Ok(())
    }

    fn latest(&self, category: RecordCategory) -> LedgerResult<Option<String>> {
        let guard = self.inner.lock().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(guard.get(&category).cloned())
    }
}

impl std::fmt::Debug for FileLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLedger").field("path", &self.path).finish()
    }
}
