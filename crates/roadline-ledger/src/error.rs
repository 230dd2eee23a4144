/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// An empty identifier was offered to a setter. The message is the fixed
    /// rejection reason every setter reports.
    #[error("content identifier cannot be empty")]
    EmptyIdentifier,

    /// I/O failure reading or writing the ledger file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ledger file is not a valid ledger document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A writer panicked while holding the ledger lock.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
