use thiserror::Error;

/// Errors reported by the range based entry points of the sorters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The inclusive range `[low, high]` does not lie inside a non-empty slice of length `len`.
    #[error("invalid sort range [{low}, {high}] for slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },
}

/// Checks that `[low, high]` is a non-empty inclusive range inside `0..len`.
pub(crate) fn check_range(low: usize, high: usize, len: usize) -> Result<(), SortError> {
    if len == 0 || low > high || high >= len {
        return Err(SortError::InvalidRange { low, high, len });
    }

    Ok(())
}
