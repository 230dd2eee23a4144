use roadline_types::RecordCategory;

use crate::error::{LedgerError, LedgerResult};

/// Storage backend for the per-category latest-identifier slots.
///
/// Implementations must be thread-safe (`Send + Sync`). Writes overwrite:
/// the ledger keeps exactly one identifier per category, not a history.
/// Every implementation must reject empty identifiers with
/// [`LedgerError::EmptyIdentifier`]; [`validate_identifier`] performs that
/// check.
pub trait Ledger: Send + Sync {
    /// Record `cid` as the latest identifier for `category`, replacing any
    /// previous value.
    fn record(&self, category: RecordCategory, cid: &str) -> LedgerResult<()>;

    /// The latest identifier recorded for `category`, if any.
    fn latest(&self, category: RecordCategory) -> LedgerResult<Option<String>>;

    /// Record the latest traffic identifier.
    fn record_traffic(&self, cid: &str) -> LedgerResult<()> {
        self.record(RecordCategory::Traffic, cid)
    }

    /// The latest traffic identifier.
    fn latest_traffic(&self) -> LedgerResult<Option<String>> {
        self.latest(RecordCategory::Traffic)
    }

    /// Record the latest accident identifier.
    fn record_accident(&self, cid: &str) -> LedgerResult<()> {
        self.record(RecordCategory::Accident, cid)
    }

    /// The latest accident identifier.
    fn latest_accident(&self) -> LedgerResult<Option<String>> {
        self.latest(RecordCategory::Accident)
    }
}

/// Reject empty identifiers. Every `record` implementation calls this first.
pub fn validate_identifier(cid: &str) -> LedgerResult<()> {
    if cid.is_empty() {
        return Err(LedgerError::EmptyIdentifier);
    }
    Ok(())
}
