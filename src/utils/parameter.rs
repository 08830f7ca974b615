//! Resolution of automation lanes inside rendering loops.
//!
//! A lane holds either a single value for the whole block or one value per
//! sample ("a-rate" automation).

use crate::Error;

/// Returns the value of `values` at `sample_index`.
///
/// The lane must have passed [`validate_lane`] for the current block size.
#[inline]
pub fn resolve(values: &[f32], sample_index: usize) -> f32 {
    if values.len() == 1 {
        values[0]
    } else {
        values[sample_index]
    }
}

/// Checks that `values` can be resolved for every index of a block.
pub fn validate_lane(name: &'static str, values: &[f32], block_size: usize) -> Result<(), Error> {
    match values.len() {
        0 => Err(Error::EmptyLane { name }),
        1 => Ok(()),
        len if len == block_size => Ok(()),
        len => Err(Error::LaneLength {
            name,
            len,
            block_size,
        }),
    }
}
