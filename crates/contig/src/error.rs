//! Storage-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while reserving a raw storage block.
///
/// Allocation failures are reported before any existing container state
/// is touched, so the triggering operation leaves its container exactly
/// as it was. They are never retried internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested slot count can never be satisfied: its total byte
    /// size exceeds the maximum allocation size (`isize::MAX`).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The global allocator could not provide the requested block.
    Exhausted {
        /// Number of bytes requested.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(
                    f,
                    "capacity overflow: {requested} slots exceed the maximum allocation size"
                )
            }
            Self::Exhausted { bytes } => {
                write!(f, "allocation failed: {bytes} bytes unavailable")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_request() {
        let err = AllocError::CapacityOverflow { requested: 12 };
        assert!(err.to_string().contains("12 slots"));

        let err = AllocError::Exhausted { bytes: 4096 };
        assert!(err.to_string().contains("4096 bytes"));
    }
}
