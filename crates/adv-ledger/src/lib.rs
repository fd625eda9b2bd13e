//! Read boundary onto the advance-result ledger.
//!
//! The ledger owns result storage and ordering. This crate provides:
//! - The `ResultFetcher` trait every ledger transport implements
//! - `validate_sequence` for checking a fetched batch honors the contract
//! - `InMemoryResults`, an in-process ledger for tests and the dev node
//! - HTTP endpoint paths and message bodies shared by node and client

pub mod endpoint;
pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;

pub use endpoint::{endpoints, AdvanceRequest, HealthResponse, ResultsQuery};
pub use error::{FetchError, FetchResult};
pub use memory::InMemoryResults;
pub use traits::ResultFetcher;
pub use validation::validate_sequence;
