//! Foundation types for advance results.
//!
//! An advance result is the ledger's record of one processed transaction:
//! its position in the result stream, how it completed, and the opaque
//! return payload the application produced. Every other `adv` crate depends
//! on `adv-types`.
//!
//! # Key Types
//!
//! - [`AdvanceResult`] - Immutable result handle with position and payload
//! - [`AdvanceStatus`] - Completion status reported by the ledger
//! - [`TypeError`] - Wire-format parsing failures

pub mod error;
pub mod result;
pub mod wire;

pub use error::TypeError;
pub use result::{AdvanceResult, AdvanceStatus};
pub use wire::{decode_hex, encode_hex};
