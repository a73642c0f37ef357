//! Defines the seam between the transforms and the downstream byte compressor.
//!
//! The pipelines never call zstd directly; they go through `ByteCompressor`, so
//! the entropy stage can be swapped (or replaced by an identity stage in tests)
//! without touching the transforms.

use crate::error::NumshuffleError;
use crate::kernels;

/// A general-purpose byte compressor producing self-describing frames.
pub trait ByteCompressor {
    /// Compresses `input` into `out`, replacing its contents. The frame must
    /// carry enough information for `decompress` to recover `input` exactly.
    fn compress(&self, input: &[u8], level: i32, out: &mut Vec<u8>) -> Result<(), NumshuffleError>;

    /// Recovers exactly the bytes passed to `compress`, replacing the contents
    /// of `out`.
    fn decompress(&self, frame: &[u8], out: &mut Vec<u8>) -> Result<(), NumshuffleError>;

    /// Conservative upper bound on the frame size for `input_len` bytes.
    fn bound(&self, input_len: usize) -> usize;
}

/// The default entropy stage: one zstd frame per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZstdCompressor;

impl ByteCompressor for ZstdCompressor {
    fn compress(&self, input: &[u8], level: i32, out: &mut Vec<u8>) -> Result<(), NumshuffleError> {
        kernels::zstd::encode(input, out, level)
    }

    fn decompress(&self, frame: &[u8], out: &mut Vec<u8>) -> Result<(), NumshuffleError> {
        kernels::zstd::decode(frame, out)
    }

    fn bound(&self, input_len: usize) -> usize {
        kernels::zstd::compress_bound(input_len)
    }
}
