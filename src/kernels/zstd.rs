//! This module contains the pure, stateless kernels for Zstandard compression
//! and decompression.
//!
//! This is the final stage of every pipeline: it takes a byte buffer that the
//! transforms have already laid out for compressibility and applies zstd. Frames
//! are produced with the one-shot API, so each one records its own content size;
//! decompression reads that size back to allocate the output exactly.
//! This module is a safe, panic-free wrapper around the `zstd` crate.

use crate::error::NumshuffleError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Worst-case compressed size for `input_len` bytes.
pub fn compress_bound(input_len: usize) -> usize {
    zstd::zstd_safe::compress_bound(input_len)
}

/// Compresses `input_bytes` into `output_buf`, replacing its contents.
///
/// An empty input produces an empty frame.
pub fn encode(input_bytes: &[u8], output_buf: &mut Vec<u8>, level: i32) -> Result<(), NumshuffleError> {
    output_buf.clear();
    if input_bytes.is_empty() {
        return Ok(());
    }

    output_buf.resize(compress_bound(input_bytes.len()), 0);
    let used = zstd::bulk::compress_to_buffer(input_bytes, &mut output_buf[..], level)
        .map_err(|e| NumshuffleError::CompressorError(e.to_string()))?;
    output_buf.truncate(used);
    Ok(())
}

/// Decompresses one zstd frame into `output_buf`, replacing its contents.
///
/// An empty frame decodes to empty output.
///
/// # Errors
/// `CompressorError` if the frame does not declare its content size, the
/// declared size cannot be allocated, or the frame is corrupt.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), NumshuffleError> {
    output_buf.clear();
    if input_bytes.is_empty() {
        return Ok(());
    }

    let content_size = zstd::zstd_safe::get_frame_content_size(input_bytes)
        .map_err(|_| {
            NumshuffleError::CompressorError("Input is not a valid zstd frame.".to_string())
        })?
        .ok_or_else(|| {
            NumshuffleError::CompressorError(
                "zstd frame does not declare its uncompressed size.".to_string(),
            )
        })?;
    let content_size = usize::try_from(content_size).map_err(|_| {
        NumshuffleError::CompressorError(format!(
            "Declared uncompressed size {} does not fit in memory.",
            content_size
        ))
    })?;

    output_buf
        .try_reserve_exact(content_size)
        .map_err(|e| NumshuffleError::CompressorError(e.to_string()))?;
    output_buf.resize(content_size, 0);
    let used = zstd::bulk::decompress_to_buffer(input_bytes, &mut output_buf[..])
        .map_err(|e| NumshuffleError::CompressorError(e.to_string()))?;

    if used != content_size {
        output_buf.clear();
        return Err(NumshuffleError::CompressorError(format!(
            "Decompressed size does not match header. Expected {}, got {}.",
            content_size, used
        )));
    }
    Ok(())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip_simple_text() {
        let original_bytes =
            b"hello world, this is a test of zstd compression. hello world, this is a test."
                .to_vec();

        let mut compressed = Vec::new();
        encode(&original_bytes, &mut compressed, 3).unwrap();
        assert!(compressed.len() < original_bytes.len());

        let mut decompressed = Vec::new();
        decode(&compressed, &mut decompressed).unwrap();
        assert_eq!(original_bytes, decompressed);
    }

    #[test]
    fn test_zstd_frame_records_content_size() {
        let original_bytes = vec![42u8; 10_000];
        let mut compressed = Vec::new();
        encode(&original_bytes, &mut compressed, 5).unwrap();
        assert!(compressed.len() < 50);
        assert!(compressed.len() <= compress_bound(original_bytes.len()));

        let declared = zstd::zstd_safe::get_frame_content_size(&compressed).unwrap();
        assert_eq!(declared, Some(10_000));
    }

    #[test]
    fn test_empty_roundtrip() {
        let mut compressed = vec![1, 2, 3];
        encode(&[], &mut compressed, 3).unwrap();
        assert!(compressed.is_empty());

        let mut decompressed = vec![9];
        decode(&compressed, &mut decompressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_zstd_decompress_invalid_data() {
        let invalid_bytes = vec![1, 2, 3, 4, 5];
        let mut decompressed = Vec::new();
        let result = decode(&invalid_bytes, &mut decompressed);
        assert!(matches!(result, Err(NumshuffleError::CompressorError(_))));
    }

    #[test]
    fn test_zstd_truncated_frame() {
        let mut compressed = Vec::new();
        encode(&(0..4096u32).flat_map(|v| v.to_le_bytes()).collect::<Vec<_>>(), &mut compressed, 3)
            .unwrap();
        compressed.truncate(compressed.len() / 2);

        let mut decompressed = Vec::new();
        assert!(decode(&compressed, &mut decompressed).is_err());
    }
}
