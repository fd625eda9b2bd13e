use adv_types::AdvanceResult;

use crate::error::{FetchError, FetchResult};

/// Check that `results` is a gapless ascending run starting at `from`.
///
/// An empty batch is valid for any `from`.
pub fn validate_sequence(from: u64, results: &[AdvanceResult]) -> FetchResult<()> {
    for (offset, result) in results.iter().enumerate() {
        let expected = from
            .checked_add(offset as u64)
            .ok_or(FetchError::OutOfOrder {
                expected: u64::MAX,
                found: result.index(),
            })?;
        if result.index() != expected {
            return Err(FetchError::OutOfOrder {
                expected,
                found: result.index(),
            });
        }
    }
    Ok(())
}
