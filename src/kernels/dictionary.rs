//! This module contains the kernel for dictionary encoding.
//!
//! It is highly effective for data with low cardinality. The distinct values of
//! the input are collected into a dictionary sorted by raw bit pattern, and the
//! data itself is replaced by a stream of minimal-width ranks into that
//! dictionary. Both regions are byte-transposed.
//!
//! ### Buffer Format (all integers little-endian)
//! ```text
//! [0..8)              u64 data_offset   byte offset where the index region begins
//! [8..16)             u64 value_count   number of distinct values
//! [16..data_offset)   transposed dictionary, value_count entries of I = size_of::<T>() bytes
//! [data_offset..end)  transposed ranks, N entries of K bytes
//! ```
//! `I = (data_offset - 16) / value_count` and `K` follows from `value_count`
//! alone (`IndexWidth::for_value_count`), so the buffer is self-describing.
//!
//! The dictionary is ordered by unsigned bit pattern, not numerically: negative
//! signed integers and negative floats sort after the positive values. Ranks
//! are symmetric, so this never affects round-trips, but it is part of the
//! byte-exact format.

use hashbrown::HashMap;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::TransposeMode;
use crate::error::NumshuffleError;
use crate::kernels::byte_view::{read_le, write_le, ByteView};
use crate::kernels::transpose::{reverse_transpose, transpose_into};
use crate::traits::{BitPattern, Numeric};
use crate::types::NumshuffleDataType;

/// Size of the fixed `(data_offset, value_count)` header.
pub const HEADER_SIZE: usize = 16;

//==================================================================================
// 1. Index Width Selection
//==================================================================================

/// The closed set of rank widths. Each variant selects one monomorphized
/// encode/decode handler.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexWidth {
    One,
    Two,
    Four,
    Eight,
}

impl IndexWidth {
    /// The smallest width `K` such that `value_count <= 2^(8K)`.
    ///
    /// Encoder and decoder both call this; it is the only place the boundary is
    /// defined. An empty dictionary selects `One`.
    pub fn for_value_count(value_count: u64) -> IndexWidth {
        if value_count <= 1 << 8 {
            IndexWidth::One
        } else if value_count <= 1 << 16 {
            IndexWidth::Two
        } else if value_count <= 1 << 32 {
            IndexWidth::Four
        } else {
            IndexWidth::Eight
        }
    }

    /// Width of one rank in bytes.
    pub fn bytes(&self) -> usize {
        match self {
            IndexWidth::One => 1,
            IndexWidth::Two => 2,
            IndexWidth::Four => 4,
            IndexWidth::Eight => 8,
        }
    }
}

//==================================================================================
// 2. Encode
//==================================================================================

/// Dictionary-encodes `values`, clearing `out` and writing the full buffer.
///
/// # Errors
/// `CapacityError` if the distinct count or the buffer size cannot be
/// represented. All capacity checks run before anything is written, and `out`
/// is left empty on any failure.
pub fn encode<T: Numeric>(values: &[T], out: &mut Vec<u8>) -> Result<(), NumshuffleError> {
    out.clear();

    let mut sorted: Vec<T::Bits> = values.iter().map(|v| v.to_bits()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let value_count = u64::try_from(sorted.len()).map_err(|_| {
        NumshuffleError::CapacityError(format!(
            "Cannot encode a dictionary with {} distinct values (more than 2^64)",
            sorted.len()
        ))
    })?;
    let index_width = IndexWidth::for_value_count(value_count);
    let data_offset = value_count
        .checked_mul(T::WIDTH as u64)
        .and_then(|n| n.checked_add(HEADER_SIZE as u64))
        .ok_or_else(|| {
            NumshuffleError::CapacityError(format!(
                "Dictionary of {} entries of {} bytes overflows the data offset",
                value_count,
                T::WIDTH
            ))
        })?;
    let total_len = usize::try_from(data_offset)
        .ok()
        .zip(values.len().checked_mul(index_width.bytes()))
        .and_then(|(offset, index_bytes)| offset.checked_add(index_bytes))
        .ok_or_else(|| {
            NumshuffleError::CapacityError(format!(
                "Dictionary buffer for {} values does not fit in memory",
                values.len()
            ))
        })?;

    let ranks: HashMap<T::Bits, u64> = sorted
        .iter()
        .enumerate()
        .map(|(rank, bits)| (*bits, rank as u64))
        .collect();

    out.reserve(total_len);
    write_le(data_offset, out);
    write_le(value_count, out);
    transpose_into(&sorted, out);

    let result = match index_width {
        IndexWidth::One => emit_indices::<T, u8>(values, &ranks, out),
        IndexWidth::Two => emit_indices::<T, u16>(values, &ranks, out),
        IndexWidth::Four => emit_indices::<T, u32>(values, &ranks, out),
        IndexWidth::Eight => emit_indices::<T, u64>(values, &ranks, out),
    };
    if result.is_err() {
        out.clear();
    }
    result?;

    crate::log_metric!(
        "event" = "dictionary_encode",
        "type" = T::DATA_TYPE,
        "values" = values.len(),
        "distinct" = value_count,
        "index_width" = index_width.bytes(),
        "bytes" = out.len()
    );
    Ok(())
}

/// Writes the rank of every element, in original order, as one transposed
/// block of `K`-byte indices.
fn emit_indices<T: Numeric, K: BitPattern>(
    values: &[T],
    ranks: &HashMap<T::Bits, u64>,
    out: &mut Vec<u8>,
) -> Result<(), NumshuffleError> {
    let mut indices: Vec<K> = Vec::with_capacity(values.len());
    for value in values {
        let bits = value.to_bits();
        let rank = ranks.get(&bits).copied().ok_or_else(|| {
            NumshuffleError::InternalError(format!(
                "Value with bit pattern {:?} is missing from its own dictionary",
                bits
            ))
        })?;
        let index = K::from_u64(rank).ok_or_else(|| {
            NumshuffleError::CapacityError(format!(
                "Rank {} does not fit in a {}-byte index",
                rank,
                K::WIDTH
            ))
        })?;
        indices.push(index);
    }
    transpose_into(&indices, out);
    Ok(())
}

//==================================================================================
// 3. Header Inspection
//==================================================================================

/// Everything the header of a dictionary buffer says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub data_offset: usize,
    pub value_count: usize,
    /// `None` for an empty dictionary, where the entry width is unknowable.
    pub entry_width: Option<usize>,
    pub index_width: IndexWidth,
    /// Whole indices in the index region.
    pub index_count: usize,
    /// Bytes after the last whole index.
    pub trailing_bytes: usize,
}

impl DictionaryInfo {
    /// The element types a buffer with this entry width can decode into.
    pub fn compatible_types(&self) -> Vec<NumshuffleDataType> {
        match self.entry_width {
            Some(width) => NumshuffleDataType::with_width(width),
            None => NumshuffleDataType::ALL.to_vec(),
        }
    }
}

/// Reads and validates the header of a dictionary buffer without decoding any
/// values.
///
/// # Errors
/// `FormatError` if the buffer is shorter than the header, the data offset lies
/// outside `16..=len`, the dictionary region is not a whole number of entries
/// of 1, 2, 4 or 8 bytes, or an empty dictionary is followed by index data.
pub fn inspect(buf: &[u8]) -> Result<DictionaryInfo, NumshuffleError> {
    let header = read_le::<u64>(buf).zip(buf.get(8..).and_then(read_le::<u64>));
    let (data_offset, value_count) = match header {
        Some(fields) => fields,
        None => {
            return Err(NumshuffleError::FormatError(format!(
                "Buffer of {} bytes is shorter than the {}-byte dictionary header",
                buf.len(),
                HEADER_SIZE
            )))
        }
    };

    if data_offset > buf.len() as u64 {
        return Err(NumshuffleError::FormatError(format!(
            "Data offset {} exceeds buffer length {}",
            data_offset,
            buf.len()
        )));
    }
    // data_offset <= buf.len(), so it fits in usize from here on.
    let data_offset = data_offset as usize;
    if data_offset < HEADER_SIZE {
        return Err(NumshuffleError::FormatError(format!(
            "Data offset {} points inside the {}-byte header",
            data_offset, HEADER_SIZE
        )));
    }

    let dictionary_len = data_offset - HEADER_SIZE;
    let index_region_len = buf.len() - data_offset;

    if value_count == 0 {
        if dictionary_len != 0 || index_region_len != 0 {
            return Err(NumshuffleError::FormatError(format!(
                "Empty dictionary followed by {} byte(s) of data",
                dictionary_len + index_region_len
            )));
        }
        return Ok(DictionaryInfo {
            data_offset,
            value_count: 0,
            entry_width: None,
            index_width: IndexWidth::for_value_count(0),
            index_count: 0,
            trailing_bytes: 0,
        });
    }

    if dictionary_len as u64 % value_count != 0 {
        return Err(NumshuffleError::FormatError(format!(
            "Dictionary region of {} bytes does not hold {} whole entries",
            dictionary_len, value_count
        )));
    }
    let entry_width = (dictionary_len as u64 / value_count) as usize;
    if !matches!(entry_width, 1 | 2 | 4 | 8) {
        return Err(NumshuffleError::FormatError(format!(
            "Unsupported dictionary entry width {} (expected 1, 2, 4 or 8 bytes)",
            entry_width
        )));
    }
    // value_count * entry_width == dictionary_len <= buf.len(), so it fits.
    let value_count = value_count as usize;

    let index_width = IndexWidth::for_value_count(value_count as u64);
    let index_count = index_region_len / index_width.bytes();
    let trailing_bytes = index_region_len % index_width.bytes();

    Ok(DictionaryInfo {
        data_offset,
        value_count,
        entry_width: Some(entry_width),
        index_width,
        index_count,
        trailing_bytes,
    })
}

//==================================================================================
// 4. Decode
//==================================================================================

/// Decodes a dictionary buffer into `out` in `Strict` mode.
pub fn decode<T: Numeric>(buf: &[u8], out: &mut Vec<T>) -> Result<(), NumshuffleError> {
    decode_with_mode(buf, out, TransposeMode::Strict)
}

/// Decodes a dictionary buffer into `out`, clearing it first.
///
/// The header is fully validated before the data regions are touched. `mode`
/// decides whether trailing bytes in the index region are an error.
///
/// # Errors
/// `FormatError` for any malformed header (see `inspect`), a dictionary whose
/// entry width differs from `size_of::<T>()`, trailing index bytes in `Strict`
/// mode, or a rank outside the dictionary. `out` is empty on failure.
pub fn decode_with_mode<T: Numeric>(
    buf: &[u8],
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError> {
    out.clear();
    let info = inspect(buf)?;
    if info.value_count == 0 {
        return Ok(());
    }
    if info.entry_width != Some(T::WIDTH) {
        return Err(NumshuffleError::FormatError(format!(
            "Dictionary entry width {:?} does not match {} ({} bytes)",
            info.entry_width,
            T::DATA_TYPE,
            T::WIDTH
        )));
    }

    let mut lookup_bits: Vec<T::Bits> = Vec::new();
    let dictionary_region = &buf[HEADER_SIZE..info.data_offset];
    reverse_transpose(dictionary_region, &mut lookup_bits, TransposeMode::Strict)?;
    let lookup: Vec<T> = lookup_bits.into_iter().map(T::from_bits).collect();

    let index_region = &buf[info.data_offset..];
    let result = match info.index_width {
        IndexWidth::One => decode_indices::<T, u8>(index_region, &lookup, out, mode),
        IndexWidth::Two => decode_indices::<T, u16>(index_region, &lookup, out, mode),
        IndexWidth::Four => decode_indices::<T, u32>(index_region, &lookup, out, mode),
        IndexWidth::Eight => decode_indices::<T, u64>(index_region, &lookup, out, mode),
    };
    if result.is_err() {
        out.clear();
    }
    result
}

/// Recovers the `K`-byte ranks and appends the dictionary value for each.
fn decode_indices<T: Numeric, K: BitPattern>(
    region: &[u8],
    lookup: &[T],
    out: &mut Vec<T>,
    mode: TransposeMode,
) -> Result<(), NumshuffleError> {
    let mut indices: Vec<K> = Vec::new();
    reverse_transpose(region, &mut indices, mode)?;

    out.reserve(indices.len());
    for index in indices {
        let value = index.to_usize().and_then(|i| lookup.get(i)).ok_or_else(|| {
            NumshuffleError::FormatError(format!(
                "Invalid dictionary index: {:?} (dictionary size is {})",
                index,
                lookup.len()
            ))
        })?;
        out.push(*value);
    }
    Ok(())
}

//==================================================================================
// 5. Unit Tests
//==================================================================================
