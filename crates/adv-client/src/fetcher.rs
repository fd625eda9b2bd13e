use adv_ledger::{endpoints, validate_sequence, FetchError, FetchResult, ResultFetcher};
use adv_types::AdvanceResult;
use async_trait::async_trait;
use reqwest::Client;

/// Reads results from a node's `GET /v1/results` endpoint.
///
/// Failures are reported once and never retried. Responses that are not a
/// gapless ascending run from the requested position are rejected.
#[derive(Clone, Debug)]
pub struct HttpResultFetcher {
    base: String,
    client: Client,
}

impl HttpResultFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(base, Client::new())
    }

    pub fn with_client(base: impl Into<String>, client: Client) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn results_url(&self) -> String {
        format!("{}{}", self.base, endpoints::RESULTS)
    }
}

#[async_trait]
impl ResultFetcher for HttpResultFetcher {
    async fn fetch(&self, from: u64) -> FetchResult<Vec<AdvanceResult>> {
        let url = self.results_url();
        tracing::debug!(%url, from, "fetching results");

        let resp = self
            .client
            .get(&url)
            .query(&[("from", from)])
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let results: Vec<AdvanceResult> = resp
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        validate_sequence(from, &results)?;
        Ok(results)
    }
}
