use thiserror::Error;

/// Errors produced by the vector codec and similarity search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// A stored blob cannot represent a whole number of f32 elements.
    #[error("malformed embedding blob: {len} bytes is not a multiple of 4")]
    MalformedEncoding { len: usize },

    /// Two vectors being compared have different dimensionality. This is a
    /// contract violation (index corruption or a caller bug), never a data
    /// condition to be skipped over.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
