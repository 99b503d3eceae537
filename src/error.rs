//! Error types for gridswap.
//!
//! Painting itself never fails: geometry handed to a [`Painter`](crate::Painter)
//! is trusted. Errors only come out of the places where a caller names a
//! surface or a region that may not exist.

use std::fmt;

/// Result type alias for gridswap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gridswap operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Surface dimension error (zero width or height).
    InvalidDimensions { width: u32, height: u32 },
    /// A pool needs at least one surface.
    InvalidSurfaceCount(usize),
    /// Surface index not present in the pool.
    SurfaceIndex { index: usize, count: usize },
    /// Region lies entirely outside the surface.
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::InvalidSurfaceCount(count) => {
                write!(f, "surface count must be at least 1, got {count}")
            }
            Self::SurfaceIndex { index, count } => {
                write!(f, "surface index {index} out of range for pool of {count}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "region {width}x{height} at ({x}, {y}) lies outside the surface"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 25,
        };
        assert!(err.to_string().contains("0x25"));

        let err = Error::SurfaceIndex { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "surface index 3 out of range for pool of 2"
        );

        let err = Error::OutOfBounds {
            x: -4,
            y: 20,
            width: 2,
            height: 2,
        };
        assert!(err.to_string().contains("(-4, 20)"));

        let err = Error::InvalidSurfaceCount(0);
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::InvalidSurfaceCount(0));
    }
}
