//! Error types for container operations.

use std::collections::TryReserveError;
use std::fmt::Debug;

use thiserror::Error;

/// Failures surfaced by the fallible (`try_*`) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The position is a sentinel where an element was required, or it no
    /// longer denotes a live slot of the container.
    #[error("invalid position")]
    InvalidPosition,

    /// Growing the node arena or the segment buffer failed. The container is
    /// left exactly as it was before the call.
    #[error("allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),

    /// Every node id of a linked container is in use.
    #[error("node capacity exceeded")]
    CapacityExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fail fast on a precondition violation of an infallible operation.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn invalid_position<P: Debug>(at: P) -> ! {
    panic!("{}: {at:?}", Error::InvalidPosition)
}
