/// Errors from index operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// I/O failure reading or writing the index file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The index file is not a valid index document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A writer panicked while holding the index lock.
    #[error("index lock poisoned")]
    LockPoisoned,
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
