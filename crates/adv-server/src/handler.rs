use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;

use adv_ledger::{AdvanceRequest, HealthResponse, InMemoryResults, ResultsQuery};
use adv_types::AdvanceResult;

use crate::error::NodeResult;

pub type SharedLedger = Arc<InMemoryResults>;

/// Health check handler.
pub async fn health_handler(State(ledger): State<SharedLedger>) -> NodeResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse::ok(ledger.len()? as u64)))
}

/// Results since `?from=N`, oldest first.
pub async fn results_handler(
    State(ledger): State<SharedLedger>,
    Query(query): Query<ResultsQuery>,
) -> NodeResult<Json<Vec<AdvanceResult>>> {
    let results = ledger.results_since(query.from)?;
    tracing::debug!(from = query.from, count = results.len(), "serving results");
    Ok(Json(results))
}

/// Record a processed transaction.
pub async fn advance_handler(
    State(ledger): State<SharedLedger>,
    Json(req): Json<AdvanceRequest>,
) -> NodeResult<Json<AdvanceResult>> {
    let result = ledger.append(req.status, req.raw_return, req.logs)?;
    tracing::info!(index = result.index(), status = %result.status(), "advance recorded");
    Ok(Json(result))
}
