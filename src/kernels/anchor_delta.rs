//! This module contains the pure kernels for the anchor-delta transform.
//!
//! Elements `2..N` are re-expressed relative to their predecessor and re-biased
//! by the first element (the "anchor"): `a[i] := a[i] - a[i-1] + a[0]`.
//! Element 1 is left unchanged. Smooth or monotonic sequences collapse into
//! values clustered around the anchor, which byte-shuffle and the downstream
//! compressor exploit.
//!
//! The arithmetic runs on the bit pattern with wrapping unsigned operations.
//! For integers this is exactly the type's own wrapping arithmetic; for floats
//! it keeps the transform bit-exact for every input, NaN and infinities included.
//!
//! Both core functions work **in place**. `encode_in_place` therefore mutates
//! the caller's data; use `encode_to_vec` when the original must survive.

use num_traits::{WrappingAdd, WrappingSub};

use crate::traits::Numeric;

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Anchor-delta encodes `data` **in place**. Slices shorter than 2 are untouched.
///
/// Float output is not byte-compatible with encoders that apply IEEE
/// subtraction and addition; it is only guaranteed to invert through
/// `decode_in_place`.
pub fn encode_in_place<T: Numeric>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let anchor = data[0].to_bits();
    let mut previous = anchor;

    for value in data.iter_mut().skip(1) {
        let original = value.to_bits();
        let bias = anchor.wrapping_sub(&previous);
        *value = T::from_bits(original.wrapping_add(&bias));
        previous = original;
    }
}

/// Inverts `encode_in_place` **in place**. Slices shorter than 2 are untouched.
///
/// Each step adds `prev_decoded - anchor`, where `prev_decoded` is the value
/// just reconstructed, not the still-encoded one.
pub fn decode_in_place<T: Numeric>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let anchor = data[0].to_bits();
    let mut prev_decoded = data[1].to_bits();

    for value in data.iter_mut().skip(2) {
        let step = prev_decoded.wrapping_sub(&anchor);
        let decoded = value.to_bits().wrapping_add(&step);
        *value = T::from_bits(decoded);
        prev_decoded = decoded;
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Non-mutating variant of `encode_in_place`: copies `data` first.
pub fn encode_to_vec<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut encoded = data.to_vec();
    encode_in_place(&mut encoded);
    encoded
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
