//! Error types for container operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every capacity-growing operation is fallible: allocation failure and
/// layout overflow are reported here rather than aborting the process.
/// Checked element access reports the offending index together with the
/// live length at the time of access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// The global allocator returned null for the requested block.
    ///
    /// The container is unchanged; the operation may be retried after
    /// freeing memory.
    AllocationFailed {
        /// Size of the requested block in bytes.
        bytes: usize,
    },
    /// The requested slot count cannot be represented as an allocation
    /// for this element type.
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// An index outside the live range `[0, len)`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of access.
        len: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation failed: requested {bytes} bytes")
            }
            Self::CapacityOverflow { requested } => {
                write!(
                    f,
                    "capacity overflow: {requested} slots exceed the maximum allocation"
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds: length {len}")
            }
        }
    }
}

impl Error for VecError {}
