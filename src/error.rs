use thiserror::Error;

/// Failure to obtain the storage block for a [`RingDeque`](crate::RingDeque).
///
/// Returned by the fallible constructors and capacity-changing operations
/// (`try_with_capacity`, `try_reserve`). The receiving buffer, if one already
/// exists, is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// A ring buffer cannot be constructed with zero slots.
    #[error("ring capacity must be greater than zero")]
    ZeroCapacity,

    /// The allocator could not provide a block of the requested size.
    #[error("failed to allocate ring storage for {0} elements")]
    AllocFailed(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CapacityError::ZeroCapacity.to_string(),
            "ring capacity must be greater than zero"
        );
        assert_eq!(
            CapacityError::AllocFailed(128).to_string(),
            "failed to allocate ring storage for 128 elements"
        );
    }
}
