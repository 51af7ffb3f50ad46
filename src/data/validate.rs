use crate::error::G25Error;

use super::model::DIMS;

/// Position of the first non-finite component, with its value.
///
/// Returns `None` when every component is a finite number.
pub fn first_non_finite(vector: &[f64]) -> Option<(usize, f64)> {
    vector
        .iter()
        .copied()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
}

/// Check that a vector may enter a mean: exactly [`DIMS`] components.
pub fn ensure_dims(vector: &[f64]) -> Result<(), G25Error> {
    if vector.len() != DIMS {
        return Err(G25Error::Dimension {
            found: vector.len(),
            expected: DIMS,
        });
    }
    Ok(())
}
