use roadline_types::Cid;

use crate::error::StoreResult;

/// Content-addressed blob store.
///
/// All implementations must satisfy these invariants:
/// - Blobs are immutable once written. Content-addressing guarantees this:
///   the same data always produces the same ID.
/// - `put` is idempotent: storing bytes that are already present is a no-op
///   that returns the existing ID.
/// - Concurrent reads are always safe (blobs are immutable).
/// - The store never interprets blob contents — it is a pure key-value store.
/// - All I/O errors are propagated, never silently ignored.
pub trait BlobStore: Send + Sync {
    /// Store raw bytes and return their content-addressed ID.
    fn put(&self, data: &[u8]) -> StoreResult<Cid>;

    /// Read a blob by its content-addressed ID.
    ///
    /// Returns `Ok(None)` if the blob does not exist.
    /// Returns `Err` on I/O failure or data corruption.
    fn get(&self, id: &Cid) -> StoreResult<Option<Vec<u8>>>;

    /// Check whether a blob exists in the store.
    fn exists(&self, id: &Cid) -> StoreResult<bool>;

    /// Delete a blob by ID. Returns `true` if the blob existed.
    ///
    /// Intended for cleanup in tests and tooling. Deleting a blob that the
    /// index still references makes the corresponding records unavailable.
    fn delete(&self, id: &Cid) -> StoreResult<bool>;
}
