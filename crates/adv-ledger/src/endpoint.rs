use adv_types::AdvanceStatus;
use serde::{Deserialize, Serialize};

/// HTTP endpoint paths served by a ledger node.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const RESULTS: &str = "/v1/results";
    pub const ADVANCE: &str = "/v1/advance";
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub results: u64,
}

impl HealthResponse {
    pub fn ok(results: u64) -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            results,
        }
    }
}

/// Query string of `GET /v1/results`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub from: u64,
}

/// Body of `POST /v1/advance`: records a processed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceRequest {
    #[serde(default)]
    pub status: AdvanceStatus,
    #[serde(default, with = "adv_types::wire::hex_bytes")]
    pub raw_return: Vec<u8>,
    #[serde(default)]
    pub logs: Vec<String>,
}
