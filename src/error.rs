//! Error types for tablero operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tablero operations.
///
/// All computation here is pure and in-memory, so every variant is a
/// precondition violation surfaced immediately rather than a transient
/// fault to retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Invalid dimensions for a framebuffer or panel.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Data length mismatch between inputs and outputs.
    #[error("Data length mismatch: inputs has {x_len} elements, outputs has {y_len} elements")]
    DataLengthMismatch {
        /// Length of the input data.
        x_len: usize,
        /// Length of the output data.
        y_len: usize,
    },

    /// Fewer than two sample points requested from a column.
    ///
    /// A single point has no spacing between min and max, so the request
    /// is rejected instead of dividing by zero.
    #[error("Invalid point count: {count} (need at least 2)")]
    InvalidPointCount {
        /// Requested number of points.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_data_length_mismatch() {
        let err = Error::DataLengthMismatch { x_len: 10, y_len: 20 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_invalid_point_count() {
        let err = Error::InvalidPointCount { count: 1 };
        assert!(err.to_string().contains("at least 2"));
    }
}
