use crate::math::Real;

/// Error raised when a shape is built or resized with an invalid dimension.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A dimension was zero, negative, infinite or NaN.
    #[error("the {dimension} of a shape must be strictly positive and finite, got {value}")]
    NonPositiveDimension {
        /// The name of the rejected dimension, e.g. `"radius"`.
        dimension: &'static str,
        /// The rejected value.
        value: Real,
    },
}

/// Checks that `value` can be used as a shape dimension.
pub(crate) fn check_dimension(dimension: &'static str, value: Real) -> Result<Real, ShapeError> {
    // NOTE: written so that NaN fails the comparison.
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        log::debug!("Rejected shape {}: {}.", dimension, value);
        Err(ShapeError::NonPositiveDimension { dimension, value })
    }
}
