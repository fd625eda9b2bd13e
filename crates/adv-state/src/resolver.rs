use adv_codec::{Decoded, Payload, StateDecoder};
use adv_types::AdvanceResult;

use crate::error::ResolveError;

/// Find the most recent state snapshot in `results`.
///
/// `results` must be in ascending index order, as the ledger returns them.
/// The scan runs from the newest result backward and stops at the first one
/// that decodes to `S`. Results without a return value are skipped. A result
/// that decodes to any other registered type is a schema violation and ends
/// the scan with an error, since older states behind it cannot be trusted.
///
/// Returns `Ok(None)` when no result carries a state, including when
/// `results` is empty.
pub fn resolve_latest<S: Payload>(
    decoder: &StateDecoder<S>,
    results: &[AdvanceResult],
) -> Result<Option<S>, ResolveError> {
    for result in results.iter().rev() {
        match decoder.decode(result) {
            Decoded::Absent => {
                tracing::trace!(index = result.index(), "no return value");
            }
            Decoded::State(state) => {
                tracing::debug!(index = result.index(), "found latest state");
                return Ok(Some(state));
            }
            Decoded::Mismatch(value) => {
                return Err(ResolveError::SchemaViolation {
                    index: result.index(),
                    expected: S::TYPE_NAME,
                    found: value.type_name,
                    value,
                });
            }
        }
    }
    tracing::debug!(scanned = results.len(), "no state found");
    Ok(None)
}
