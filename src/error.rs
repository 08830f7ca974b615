//! Error types.

use thiserror::Error;

/// Errors reported when a block cannot be rendered.
///
/// The processor writes silence before returning any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An automation lane holds no value at all.
    #[error("parameter '{name}' has no values")]
    EmptyLane {
        /// Parameter name.
        name: &'static str,
    },

    /// A per-sample automation lane does not match the block size.
    #[error("parameter '{name}' has {len} values for a block of {block_size} samples")]
    LaneLength {
        /// Parameter name.
        name: &'static str,
        /// Number of values supplied.
        len: usize,
        /// Number of samples in the output block.
        block_size: usize,
    },
}
