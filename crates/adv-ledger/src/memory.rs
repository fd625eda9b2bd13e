use std::sync::RwLock;

use adv_types::{AdvanceResult, AdvanceStatus};
use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::traits::ResultFetcher;
use crate::validation::validate_sequence;

/// In-memory advance-result ledger for tests, local demos, and the dev node.
///
/// Indices are assigned on append, starting at 0.
#[derive(Default)]
pub struct InMemoryResults {
    inner: RwLock<Vec<AdvanceResult>>,
}

impl InMemoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the ledger with an existing history, which must be a gapless
    /// run starting at index 0.
    pub fn from_results(results: Vec<AdvanceResult>) -> FetchResult<Self> {
        validate_sequence(0, &results)?;
        Ok(Self {
            inner: RwLock::new(results),
        })
    }

    /// Record a new result at the next index.
    pub fn append(
        &self,
        status: AdvanceStatus,
        raw_return: Vec<u8>,
        logs: Vec<String>,
    ) -> FetchResult<AdvanceResult> {
        let mut results = self.inner.write().map_err(|_| FetchError::Poisoned)?;
        let index = results.len() as u64;
        let result = AdvanceResult::new(index, status, raw_return, logs);
        results.push(result.clone());
        tracing::debug!(index, %status, "appended advance result");
        Ok(result)
    }

    pub fn results_since(&self, from: u64) -> FetchResult<Vec<AdvanceResult>> {
        let results = self.inner.read().map_err(|_| FetchError::Poisoned)?;
        let start = usize::try_from(from).unwrap_or(usize::MAX).min(results.len());
        Ok(results[start..].to_vec())
    }

    pub fn len(&self) -> FetchResult<usize> {
        let results = self.inner.read().map_err(|_| FetchError::Poisoned)?;
        Ok(results.len())
    }

    pub fn is_empty(&self) -> FetchResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ResultFetcher for InMemoryResults {
    async fn fetch(&self, from: u64) -> FetchResult<Vec<AdvanceResult>> {
        self.results_since(from)
    }
}
