use std::sync::Arc;

use adv_types::AdvanceResult;
use async_trait::async_trait;

use crate::error::FetchResult;

/// Read boundary for the advance-result ledger.
///
/// `fetch(from)` returns every result whose index is `>= from`, in
/// ascending index order and without gaps. `from = 0` reads the whole
/// history. The result may be empty. Implementations do not retry.
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    async fn fetch(&self, from: u64) -> FetchResult<Vec<AdvanceResult>>;
}

#[async_trait]
impl<F: ResultFetcher + ?Sized> ResultFetcher for Arc<F> {
    async fn fetch(&self, from: u64) -> FetchResult<Vec<AdvanceResult>> {
        (**self).fetch(from).await
    }
}

#[async_trait]
impl<'a, F: ResultFetcher + ?Sized> ResultFetcher for &'a F {
    async fn fetch(&self, from: u64) -> FetchResult<Vec<AdvanceResult>> {
        (**self).fetch(from).await
    }
}
