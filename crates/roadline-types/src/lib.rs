//! Foundation types for roadline.
//!
//! This crate provides the identifier and category types used throughout the
//! system. Every other roadline crate depends on `roadline-types`.
//!
//! # Key Types
//!
//! - [`Cid`] — Content identifier (domain-separated BLAKE3 hash, hex-encoded)
//! - [`RecordCategory`] — The record streams the service accepts (traffic, accident)
//! - [`TypeError`] — Parse and validation failures

pub mod category;
pub mod cid;
pub mod error;

pub use category::RecordCategory;
pub use cid::Cid;
pub use error::TypeError;
