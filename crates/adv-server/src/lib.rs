//! Development ledger node.
//!
//! Hosts an in-memory advance-result ledger over HTTP so the `adv` client
//! has something to read from during local development and tests.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::NodeConfig;
pub use error::{NodeError, NodeResult};
pub use server::DevNode;
