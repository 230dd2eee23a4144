use std::collections::HashMap;
use std::sync::RwLock;

use roadline_types::Cid;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStore;

/// In-memory, HashMap-based blob store.
///
/// Intended for tests and embedding. All blobs are held in memory behind a
/// `RwLock` for safe concurrent access. Blobs are cloned on read.
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<Cid, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored blobs.
    pub fn total_bytes(&self) -> u64 {
        self.blobs
            .read()
            .expect("lock poisoned")
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn put(&self, data: &[u8]) -> StoreResult<Cid> {
        let id = Cid::for_content(data);
        let mut map = self.blobs.write().map_err(|_| StoreError::LockPoisoned)?;
        // Idempotent: content-addressing guarantees the same ID always maps
        // to the same bytes.
        map.entry(id).or_insert_with(|| data.to_vec());
        Ok(id)
    }

    fn get(&self, id: &Cid) -> StoreResult<Option<Vec<u8>>> {
        let map = self.blobs.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(id).cloned())
    }

    fn exists(&self, id: &Cid) -> StoreResult<bool> {
        let map = self.blobs.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.contains_key(id))
    }

    fn delete(&self, id: &Cid) -> StoreResult<bool> {
        let mut map = self.blobs.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("blob_count", &self.len())
            .finish()
    }
}
