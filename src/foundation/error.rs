/// Convenience result type used across rasterlab.
pub type RasterResult<T> = Result<T, RasterError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every transform fails atomically: when one of these is returned no image has been produced and
/// the registry has not been touched.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// A referenced image name is absent from the registry.
    #[error("image not found: '{0}'")]
    NotFound(String),

    /// A mask (or other companion image) does not match the dimensions of its target.
    #[error(
        "dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Width of the target image.
        expected_width: u32,
        /// Height of the target image.
        expected_height: u32,
        /// Width of the offending image.
        actual_width: u32,
        /// Height of the offending image.
        actual_height: u32,
    },

    /// A numeric parameter is outside its documented bound.
    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(String),

    /// A parameter expected to be an integer could not be parsed as one.
    #[error("parameter not numeric: {0}")]
    ParameterNotNumeric(String),

    /// Malformed commands, invalid pixel buffers or invalid configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::NotFound`] value.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Build a [`RasterError::ParameterOutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::ParameterOutOfRange(msg.into())
    }

    /// Build a [`RasterError::ParameterNotNumeric`] value.
    pub fn not_numeric(msg: impl Into<String>) -> Self {
        Self::ParameterNotNumeric(msg.into())
    }

    /// Build a [`RasterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RasterError::DimensionMismatch`] from `(width, height)` pairs.
    pub fn dimension_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
