//! This module defines the shared traits that tie the element types to their
//! bit-pattern carriers.
//!
//! Raw reinterpretation of a typed value is never done through aliasing: every
//! element type names its unsigned carrier (`Numeric::Bits`) and converts to and
//! from it with a total, language-provided primitive (`as` between same-width
//! integers, `to_bits`/`from_bits` for floats).

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Unsigned, WrappingAdd, WrappingSub};

use crate::kernels::byte_view::ByteView;
use crate::types::NumshuffleDataType;

/// An unsigned integer that carries a raw bit pattern.
///
/// The closed set `u8`, `u16`, `u32`, `u64` doubles as the set of dictionary
/// index widths.
pub trait BitPattern:
    ByteView
    + PrimInt
    + Unsigned
    + WrappingAdd
    + WrappingSub
    + FromPrimitive
    + Hash
    + Debug
    + bytemuck::Pod
{
}

impl BitPattern for u8 {}
impl BitPattern for u16 {}
impl BitPattern for u32 {}
impl BitPattern for u64 {}

/// A fixed-width numeric element type the codec can transform.
pub trait Numeric: ByteView + bytemuck::Pod + PartialEq + Debug {
    /// The unsigned integer of identical width holding the raw bit pattern.
    type Bits: BitPattern;

    /// The runtime tag for this type.
    const DATA_TYPE: NumshuffleDataType;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty => $bits:ty, $tag:ident);* $(;)?) => {
        $(
            impl Numeric for $t {
                type Bits = $bits;
                const DATA_TYPE: NumshuffleDataType = NumshuffleDataType::$tag;

                #[inline]
                fn to_bits(self) -> $bits {
                    self as $bits
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    bits as $t
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty => $bits:ty, $tag:ident);* $(;)?) => {
        $(
            impl Numeric for $t {
                type Bits = $bits;
                const DATA_TYPE: NumshuffleDataType = NumshuffleDataType::$tag;

                #[inline]
                fn to_bits(self) -> $bits {
                    <$t>::to_bits(self)
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    <$t>::from_bits(bits)
                }
            }
        )*
    };
}

impl_numeric_int!(
    u8 => u8, UInt8;
    u16 => u16, UInt16;
    u32 => u32, UInt32;
    u64 => u64, UInt64;
    i8 => u8, Int8;
    i16 => u16, Int16;
    i32 => u32, Int32;
    i64 => u64, Int64;
);

impl_numeric_float!(
    f32 => u32, Float32;
    f64 => u64, Float64;
);
