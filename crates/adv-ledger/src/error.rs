/// Errors produced while fetching results from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("ledger returned status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("result sequence out of order: expected index {expected}, found {found}")]
    OutOfOrder { expected: u64, found: u64 },

    #[error("ledger lock poisoned")]
    Poisoned,
}

pub type FetchResult<T> = Result<T, FetchError>;
