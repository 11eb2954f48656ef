use thiserror::Error;

/// Errors produced when constructing a [`SlotRing`](crate::SlotRing).
///
/// Construction is the only fallible operation: pushes and pops report
/// shortfalls through their failed-element counts instead of errors, and
/// never leave partially transferred elements behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// The backing store could not be allocated.
    #[error("failed to allocate backing store for {capacity} elements of {width} bytes")]
    AllocFailed {
        /// Requested element capacity.
        capacity: usize,
        /// Requested element width in bytes.
        width: usize,
    },

    /// The requested element capacity was zero.
    #[error("element capacity must be nonzero")]
    ZeroCapacity,

    /// The requested element width was zero.
    #[error("element width must be nonzero")]
    ZeroWidth,
}
