use std::time::Duration;

use adv_codec::DecodedReturn;
use adv_ledger::FetchError;
use thiserror::Error;

/// The result stream broke the one-state-type invariant.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to decode return at index {index}: {value} ({found} is not {expected})")]
    SchemaViolation {
        index: u64,
        expected: &'static str,
        found: &'static str,
        value: DecodedReturn,
    },
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to serialize state: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write state: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
