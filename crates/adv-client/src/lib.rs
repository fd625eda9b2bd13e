//! HTTP client for a ledger node's result read API.

pub mod fetcher;

pub use fetcher::HttpResultFetcher;
