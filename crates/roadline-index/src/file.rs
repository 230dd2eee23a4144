//! File persistence for the index.
//!
//! The whole index is one JSON document, rewritten on every append. That is
//! fine at this scale (two categories, identifier strings), but a
//! read-modify-write cycle is only correct if writers cannot interleave:
//! [`IndexFile`] serializes all mutation behind a mutex and replaces the file
//! atomically (temp file + rename), so concurrent stores cannot drop entries.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use roadline_types::{Cid, RecordCategory};

use crate::error::{IndexError, IndexResult};
use crate::index::CidIndex;

/// File-persisted issued-identifier index.
pub struct IndexFile {
    path: PathBuf,
    inner: Mutex<CidIndex>,
}

impl IndexFile {
    /// Open an index file, creating an empty index if the file does not
    /// exist yet. The parent directory must exist.
    pub fn open(path: impl Into<PathBuf>) -> IndexResult<Self> {
        let path = path.into();
        let index = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => CidIndex::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| IndexError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CidIndex::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: Mutex::new(index),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an identifier and persist the updated document.
    ///
    /// The in-memory index only takes the new entry once the file write has
    /// succeeded, so memory and disk cannot disagree after an I/O failure.
    pub fn append(&self, category: RecordCategory, cid: Cid) -> IndexResult<()> {
        let mut guard = self.inner.lock().map_err(|_| IndexError::LockPoisoned)?;

        let mut updated = guard.clone();
        updated.append(category, cid);
        self.persist(&updated)?;

        *guard = updated;
        Ok(())
    }

    /// Returns `true` if `cid` was previously issued for `category`.
    pub fn contains(&self, category: RecordCategory, cid: &Cid) -> IndexResult<bool> {
        let guard = self.inner.lock().map_err(|_| IndexError::LockPoisoned)?;
        Ok(guard.contains(category, cid))
    }

    /// The ordered identifier list for a category.
    pub fn cids(&self, category: RecordCategory) -> IndexResult<Vec<Cid>> {
        let guard = self.inner.lock().map_err(|_| IndexError::LockPoisoned)?;
        Ok(guard.cids(category).to_vec())
    }

    /// A point-in-time copy of the whole index.
    pub fn snapshot(&self) -> IndexResult<CidIndex> {
        let guard = self.inner.lock().map_err(|_| IndexError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn persist(&self, index: &CidIndex) -> IndexResult<()> {
        // Pretty-printed so the document stays hand-inspectable.
        let json = serde_json::to_vec_pretty(index)
            .map_err(|e| IndexError::Serialization(e.to_string()))?;

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

impl std::fmt::Debug for IndexFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexFile").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cid(n: u8) -> Cid {
        Cid::for_content(&[n])
    }

    #[test]
    fn open_missing_file_yields_empty_index() {
        let dir = tempdir().unwrap();
        let index = IndexFile::open(dir.path().join("cids.json")).unwrap();
        assert!(index.snapshot().unwrap().is_empty());
    }

    #[test]
    fn append_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cids.json");

        {
            let index = IndexFile::open(&path).unwrap();
            index.append(RecordCategory::Traffic, cid(1)).unwrap();
            index.append(RecordCategory::Traffic, cid(2)).unwrap();
            index.append(RecordCategory::Accident, cid(3)).unwrap();
        }

        let index = IndexFile::open(&path).unwrap();
        assert_eq!(index.cids(RecordCategory::Traffic).unwrap(), vec![cid(1), cid(2)]);
        assert_eq!(index.cids(RecordCategory::Accident).unwrap(), vec![cid(3)]);
    }

    #[test]
    fn contains_reflects_appends() {
        let dir = tempdir().unwrap();
        let index = IndexFile::open(dir.path().join("cids.json")).unwrap();

        assert!(!index.contains(RecordCategory::Traffic, &cid(1)).unwrap());
        index.append(RecordCategory::Traffic, cid(1)).unwrap();
        assert!(index.contains(RecordCategory::Traffic, &cid(1)).unwrap());
        assert!(!index.contains(RecordCategory::Accident, &cid(1)).unwrap());
    }

    #[test]
    fn duplicates_are_kept() {
        let dir = tempdir().unwrap();
        let index = IndexFile::open(dir.path().join("cids.json")).unwrap();

        index.append(RecordCategory::Accident, cid(7)).unwrap();
        index.append(RecordCategory::Accident, cid(7)).unwrap();
        assert_eq!(index.cids(RecordCategory::Accident).unwrap().len(), 2);
    }

    #[test]
    fn document_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cids.json");
        let index = IndexFile::open(&path).unwrap();
        index.append(RecordCategory::Traffic, cid(1)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains('\n'));
        assert!(contents.contains("traffic"));
    }

    #[test]
    fn open_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cids.json");
        fs::write(&path, b"not json at all").unwrap();

        let err = IndexFile::open(&path).unwrap_err();
        assert!(matches!(err, IndexError::Serialization(_)));
    }

    #[test]
    fn open_empty_file_yields_empty_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cids.json");
        fs::write(&path, b"").unwrap();

        let index = IndexFile::open(&path).unwrap();
        assert!(index.snapshot().unwrap().is_empty());
    }

    #[test]
    fn concurrent_appends_all_land() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempdir().unwrap();
        let path = dir.path().join("cids.json");
        let index = Arc::new(IndexFile::open(&path).unwrap());

        let handles: Vec<_> = (0..8u8)
            .map(|n| {
                let index = Arc::clone(&index);
                thread::spawn(move || {
                    index.append(RecordCategory::Traffic, cid(n)).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        // Every append survived both in memory and on disk.
        assert_eq!(index.cids(RecordCategory::Traffic).unwrap().len(), 8);
        let reopened = IndexFile::open(&path).unwrap();
        assert_eq!(reopened.cids(RecordCategory::Traffic).unwrap().len(), 8);
    }
}
