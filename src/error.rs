//! Error types for engine construction.

/// Errors that can occur when building a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height was zero.
    #[error("invalid field dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
}
