//! This module defines the canonical, type-safe tag for every element type the
//! codec can transform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical runtime representation of a supported element type.
///
/// The kernels themselves are generic over `Numeric`; this tag exists so that
/// headers, logs and inspection results can talk about a type without a
/// generic parameter in scope.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumshuffleDataType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl NumshuffleDataType {
    pub const ALL: [NumshuffleDataType; 10] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
    ];

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// Returns `true` if the data type is a signed integer.
    pub fn is_signed_int(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns `true` if the data type is a floating-point number.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Every type whose bit pattern is `width` bytes wide.
    pub fn with_width(width: usize) -> Vec<NumshuffleDataType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|dt| dt.element_size() == width)
            .collect()
    }
}

impl fmt::Display for NumshuffleDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
