// In: src/error.rs

//! This module defines the single, unified error type for the entire numshuffle library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumshuffleError {
    // =========================================================================
    // === Codec Errors (Specific to our library's logic)
    // =========================================================================
    /// A malformed dictionary buffer or transposed layout.
    #[error("Format error: {0}")]
    FormatError(String),

    /// The distinct-value count or index width cannot be represented.
    #[error("Capacity exceeded: {0}")]
    CapacityError(String),

    /// An opaque failure surfaced by the downstream byte compressor.
    #[error("Compressor failed: {0}")]
    CompressorError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised while parsing a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl NumshuffleError {
    /// Builds the `FormatError` raised when a byte layout does not divide into
    /// whole elements.
    pub(crate) fn remainder(len: usize, width: usize) -> Self {
        NumshuffleError::FormatError(format!(
            "Buffer length mismatch: expected a multiple of {}, got {}",
            width, len
        ))
    }
}
