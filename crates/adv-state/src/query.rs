use std::time::Duration;

use adv_codec::{Payload, StateDecoder};
use adv_ledger::ResultFetcher;

use crate::error::QueryError;
use crate::resolver::resolve_latest;

/// Deadline applied when none is configured.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// A deadline-bounded "latest state" read against a ledger.
///
/// The fetcher, deadline and starting position are all explicit so callers
/// can substitute any [`ResultFetcher`].
pub struct StateQuery<F> {
    fetcher: F,
    deadline: Duration,
    from: u64,
}

impl<F: ResultFetcher> StateQuery<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            deadline: DEFAULT_DEADLINE,
            from: 0,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn from_position(mut self, from: u64) -> Self {
        self.from = from;
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fetch results and resolve the latest state. Either the whole read
    /// succeeds within the deadline or an error is returned.
    pub async fn latest<S: Payload>(&self, decoder: &StateDecoder<S>) -> Result<Option<S>, QueryError> {
        let read = async {
            let results = self.fetcher.fetch(self.from).await?;
            tracing::info!(from = self.from, count = results.len(), "fetched advance results");
            Ok::<_, QueryError>(resolve_latest(decoder, &results)?)
        };
        tokio::time::timeout(self.deadline, read)
            .await
            .map_err(|_| QueryError::Timeout(self.deadline))?
    }
}
