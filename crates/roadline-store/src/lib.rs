//! Content-addressed blob storage for roadline records.
//!
//! Every record the service accepts is stored as an immutable blob identified
//! by its content hash ([`Cid`](roadline_types::Cid)). The store never
//! interprets blob contents — it is a pure key-value store keyed by hash.
//!
//! # Storage Backends
//!
//! All backends implement the [`BlobStore`] trait:
//!
//! - [`InMemoryBlobStore`] — `HashMap`-based store for tests and embedding
//! - [`FsBlobStore`] — persistent filesystem blockstore (sharded object
//!   directory, atomic writes, hash verification on read)
//!
//! # Design Rules
//!
//! 1. Blobs are immutable once written (content-addressing guarantees this).
//! 2. Writes are idempotent: the same data always lands at the same ID.
//! 3. Concurrent reads are always safe (blobs are immutable).
//! 4. Reads verify the content hash; corruption is surfaced, never ignored.
//! 5. All I/O errors are propagated.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsBlobStore;
pub use memory::InMemoryBlobStore;
pub use traits::BlobStore;
