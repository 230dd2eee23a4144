use thiserror::Error;

/// Errors from the high-level API.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The submitted record carries no content (empty object/array, null,
    /// or a bare scalar).
    #[error("content is required")]
    EmptyRecord,

    /// The requested identifier was never issued by this service for the
    /// requested category.
    #[error("identifier not found in the index")]
    UnknownCid,

    /// The identifier is indexed but the blob store no longer has the bytes.
    #[error("content not found for the given identifier")]
    ContentUnavailable,

    /// Stored bytes did not decode as JSON.
    #[error("stored record is not valid JSON: {0}")]
    InvalidRecord(String),

    /// Blob store failure.
    #[error("store error: {0}")]
    Store(#[from] roadline_store::StoreError),

    /// Index failure.
    #[error("index error: {0}")]
    Index(#[from] roadline_index::IndexError),

    /// Ledger failure.
    #[error("ledger error: {0}")]
    Ledger(#[from] roadline_ledger::LedgerError),
}

/// Result alias for high-level operations.
pub type SdkResult<T> = Result<T, SdkError>;
