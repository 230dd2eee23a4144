//! Latest-identifier ledger for roadline.
//!
//! The ledger anchors the most recent content identifier per record category:
//! one overwritable slot for traffic, one for accidents. It is a register,
//! not a history; each write replaces the previous value. The full issuance
//! log lives in the index; the ledger answers "what is the current anchored
//! record for this category?"
//!
//! Identifiers are opaque strings here. The only validation is that a write
//! is non-empty; every setter fails on empty input with a fixed reason.
//!
//! # Key Types
//!
//! - [`Ledger`] — The storage trait, with category-named convenience methods
//! - [`InMemoryLedger`] — HashMap-backed slots for tests and embedding
//! - [`FileLedger`] — JSON-file-backed slots that survive process restarts

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use file::FileLedger;
pub use memory::InMemoryLedger;
pub use traits::Ledger;
