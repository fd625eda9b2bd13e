//! Latest application state resolution.
//!
//! Given the ledger's ascending stream of advance results, find the most
//! recent one whose return payload is the application's state snapshot:
//!
//! - [`resolve_latest`] scans backward and stops at the first state
//! - [`StateQuery`] fetches and resolves within a deadline
//! - [`present`] renders the outcome as indented JSON, or `{}` when there is
//!   no state yet

pub mod error;
pub mod present;
pub mod query;
pub mod resolver;

pub use error::{PresentError, QueryError, ResolveError};
pub use present::{present, render, EMPTY_STATE};
pub use query::{StateQuery, DEFAULT_DEADLINE};
pub use resolver::resolve_latest;
