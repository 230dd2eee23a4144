//! Issued-identifier index for roadline.
//!
//! The service only serves back identifiers it issued itself. This crate
//! tracks, per record category, the ordered list of identifiers the service
//! has handed out (append-only, no deletion, no deduplication) and persists
//! it as a single JSON document a human can open and read.
//!
//! # Key Types
//!
//! - [`CidIndex`] — The in-memory index (BTreeMap-backed)
//! - [`IndexFile`] — File-persisted index with serialized mutation

pub mod error;
pub mod file;
pub mod index;

pub use error::{IndexError, IndexResult};
pub use file::IndexFile;
pub use index::CidIndex;
