use std::path::Path;
use std::sync::Arc;

use adv_ledger::InMemoryResults;
use adv_types::AdvanceResult;
use tokio::net::TcpListener;

use crate::config::NodeConfig;
use crate::error::{NodeError, NodeResult};
use crate::handler::SharedLedger;
use crate::router::build_router;

/// Development ledger node.
pub struct DevNode {
    config: NodeConfig,
    ledger: SharedLedger,
}

impl DevNode {
    /// Build a node, loading the seed file if one is configured.
    pub fn new(config: NodeConfig) -> NodeResult<Self> {
        let ledger = match &config.seed_path {
            Some(path) => load_seed(path)?,
            None => InMemoryResults::new(),
        };
        Ok(Self {
            config,
            ledger: Arc::new(ledger),
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn ledger(&self) -> SharedLedger {
        self.ledger.clone()
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.ledger.clone())
    }

    /// Bind the configured address and serve requests.
    pub async fn serve(self) -> NodeResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener).await
    }

    /// Serve requests on an already-bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> NodeResult<()> {
        let app = self.router();
        let addr = listener.local_addr()?;
        let results = self.ledger.len()?;
        tracing::info!(%addr, results, "dev node listening");
        axum::serve(listener, app)
            .await
            .map_err(|e| NodeError::Internal(e.to_string()))
    }
}

fn load_seed(path: &Path) -> NodeResult<InMemoryResults> {
    let text = std::fs::read_to_string(path)?;
    let results: Vec<AdvanceResult> = serde_json::from_str(&text)
        .map_err(|e| NodeError::Seed(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), count = results.len(), "loaded seed results");
    Ok(InMemoryResults::from_results(results)?)
}
