//! This module contains the pure, stateless kernel for byte-transposing
//! ("byte-shuffling") streams of fixed-width values.
//!
//! It reorganizes an element-major sequence into `W` contiguous byte-planes:
//! plane `p` holds the `p`-th little-endian byte of every element, in element
//! order. Grouping similar byte positions is what makes the downstream
//! compressor effective on numeric data. The layout is NOT self-describing: the
//! decoder must be told the element width out of band.

use crate::config::TransposeMode;
use crate::error::NumshuffleError;
use crate::kernels::byte_view::ByteView;

//==================================================================================
// 1. Generic Core Logic (The "Engine")
//==================================================================================

/// Appends the transposed layout of `values` to `out` (`N * W` bytes).
pub fn transpose_into<T: ByteView>(values: &[T], out: &mut Vec<u8>) {
    let width = T::WIDTH;
    let num_elements = values.len();
    let start = out.len();
    out.resize(start + num_elements * width, 0);

    let planes = &mut out[start..];
    for (j, value) in values.iter().enumerate() {
        let view = value.to_le_view();
        for (p, byte) in view.as_ref().iter().enumerate() {
            planes[p * num_elements + j] = *byte;
        }
    }
}

/// Returns the number of whole elements in a layout of `len` bytes, applying
/// `mode` to any remainder.
pub fn element_count(len: usize, width: usize, mode: TransposeMode) -> Result<usize, NumshuffleError> {
    let remainder = len % width;
    if remainder != 0 {
        match mode {
            TransposeMode::Strict => return Err(NumshuffleError::remainder(len, width)),
            TransposeMode::Lenient => {
                log::trace!(
                    "transpose: ignoring {} trailing byte(s) of a {}-byte layout (width {})",
                    remainder,
                    len,
                    width
                );
            }
        }
    }
    Ok(len / width)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Clears `out` and writes the transposed layout of `values` into it.
pub fn transpose<T: ByteView>(values: &[T], out: &mut Vec<u8>) {
    out.clear();
    transpose_into(values, out);
}

/// Reverses `transpose`: clears `out` and reconstructs the elements of `buf`.
///
/// `N = buf.len() / W`. A buffer that is not a whole number of elements is a
/// `FormatError` in `Strict` mode; `Lenient` mode floors `N` and ignores the
/// trailing bytes.
pub fn reverse_transpose<T: ByteView>(
    buf: &[u8],
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError> {
    out.clear();
    let num_elements = element_count(buf.len(), T::WIDTH, mode)?;
    out.reserve(num_elements);

    for j in 0..num_elements {
        let mut view = T::LeBytes::default();
        for (p, byte) in view.as_mut().iter_mut().enumerate() {
            *byte = buf[p * num_elements + j];
        }
        out.push(T::from_le_view(view));
    }
    Ok(())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
