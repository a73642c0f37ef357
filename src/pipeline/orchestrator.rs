// In: src/pipeline/orchestrator.rs

//! The orchestration functions for every pipeline.
//!
//! Each function takes the compressor, the data, caller-owned scratch and output
//! buffers, and the level (encode) or transpose mode (decode). Scratch buffers
//! carry no state between calls: they are cleared and rebuilt every time, and
//! exist only so repeated calls can reuse their allocations. A caller running
//! pipelines on several threads gives each call its own buffers.

use crate::config::TransposeMode;
use crate::error::NumshuffleError;
use crate::kernels::byte_view::write_le;
use crate::kernels::transpose::{element_count, reverse_transpose, transpose};
use crate::kernels::{anchor_delta, dictionary};
use crate::pipeline::compressor::ByteCompressor;
use crate::traits::Numeric;

//==================================================================================
// 1. Plain Pipeline
//==================================================================================

/// Compresses the element-major little-endian bytes of `data`.
pub fn plain_compress<T, C>(
    compressor: &C,
    data: &[T],
    scratch: &mut Vec<u8>,
    out: &mut Vec<u8>,
    level: i32,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    scratch.clear();
    if cfg!(target_endian = "little") {
        scratch.extend_from_slice(bytemuck::cast_slice(data));
    } else {
        scratch.reserve(data.len() * T::WIDTH);
        for value in data {
            write_le(*value, scratch);
        }
    }
    compressor.compress(scratch, level, out)?;

    log::debug!(
        "plain_compress: {} x {} -> {} bytes",
        data.len(),
        T::DATA_TYPE,
        out.len()
    );
    Ok(())
}

/// Inverts `plain_compress` into `out`.
pub fn plain_decompress<T, C>(
    compressor: &C,
    frame: &[u8],
    scratch: &mut Vec<u8>,
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    out.clear();
    compressor.decompress(frame, scratch)?;
    out.reserve(element_count(scratch.len(), T::WIDTH, mode)?);

    for chunk in scratch.chunks_exact(T::WIDTH) {
        let mut view = T::LeBytes::default();
        view.as_mut().copy_from_slice(chunk);
        out.push(T::from_le_view(view));
    }

    log::debug!(
        "plain_decompress: {} bytes -> {} x {}",
        frame.len(),
        out.len(),
        T::DATA_TYPE
    );
    Ok(())
}

//==================================================================================
// 2. Shuffle Pipeline
//==================================================================================

/// Transposes `data` into `scratch`, then compresses it into `out`.
pub fn shuffle_compress<T, C>(
    compressor: &C,
    data: &[T],
    scratch: &mut Vec<u8>,
    out: &mut Vec<u8>,
    level: i32,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    transpose(data, scratch);
    compressor.compress(scratch, level, out)?;

    log::debug!(
        "shuffle_compress: {} x {} -> {} transposed bytes -> {} bytes",
        data.len(),
        T::DATA_TYPE,
        scratch.len(),
        out.len()
    );
    Ok(())
}

/// Decompresses `frame` into `scratch`, then reverse-transposes it into `out`.
pub fn shuffle_decompress<T, C>(
    compressor: &C,
    frame: &[u8],
    scratch: &mut Vec<u8>,
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    out.clear();
    compressor.decompress(frame, scratch)?;
    reverse_transpose(scratch, out, mode)?;

    log::debug!(
        "shuffle_decompress: {} bytes -> {} x {}",
        frame.len(),
        out.len(),
        T::DATA_TYPE
    );
    Ok(())
}

//==================================================================================
// 3. Delta Pipeline
//==================================================================================

/// Anchor-delta encodes `data` **in place**, then runs the shuffle pipeline.
///
/// On return `data` holds the delta-encoded values, not the caller's original
/// ones. Copy beforehand (or use `Codec::compress`) if the original is needed.
pub fn delta_compress_in_place<T, C>(
    compressor: &C,
    data: &mut [T],
    scratch: &mut Vec<u8>,
    out: &mut Vec<u8>,
    level: i32,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    anchor_delta::encode_in_place(data);
    shuffle_compress(compressor, data, scratch, out, level)
}

/// Runs the shuffle decode, then anchor-delta decodes `out` in place.
pub fn delta_decompress<T, C>(
    compressor: &C,
    frame: &[u8],
    scratch: &mut Vec<u8>,
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    shuffle_decompress(compressor, frame, scratch, out, mode)?;
    anchor_delta::decode_in_place(out);
    Ok(())
}

//==================================================================================
// 4. Dictionary Pipeline
//==================================================================================

/// Dictionary-encodes `data` into `dict_buf`, then compresses that buffer.
pub fn dictionary_compress<T, C>(
    compressor: &C,
    data: &[T],
    dict_buf: &mut Vec<u8>,
    out: &mut Vec<u8>,
    level: i32,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    out.clear();
    dictionary::encode(data, dict_buf)?;
    compressor.compress(dict_buf, level, out)?;

    log::debug!(
        "dictionary_compress: {} x {} -> {} dictionary bytes -> {} bytes",
        data.len(),
        T::DATA_TYPE,
        dict_buf.len(),
        out.len()
    );
    Ok(())
}

/// Decompresses `frame` into `dict_buf`, then dictionary-decodes it into `out`.
///
/// The encoder always writes the 16-byte header, so a frame that decompresses
/// to fewer bytes (an empty one included) is a `FormatError`.
pub fn dictionary_decompress<T, C>(
    compressor: &C,
    frame: &[u8],
    dict_buf: &mut Vec<u8>,
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError>
where
    T: Numeric,
    C: ByteCompressor + ?Sized,
{
    out.clear();
    compressor.decompress(frame, dict_buf)?;
    dictionary::decode_with_mode(dict_buf, out, mode)?;

    log::debug!(
        "dictionary_decompress: {} bytes -> {} dictionary bytes -> {} x {}",
        frame.len(),
        dict_buf.len(),
        out.len(),
        T::DATA_TYPE
    );
    Ok(())
}
