use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use adv_ledger::endpoints;

use crate::handler::{self, SharedLedger};

/// Build the axum router with all node endpoints.
pub fn build_router(ledger: SharedLedger) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::RESULTS, get(handler::results_handler))
        .route(endpoints::ADVANCE, post(handler::advance_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}
