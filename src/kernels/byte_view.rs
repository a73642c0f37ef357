//! This module contains the endian byte-view: the foundation every other kernel
//! builds on.
//!
//! A value of width `W` is always seen as exactly `W` bytes in little-endian
//! order, regardless of the host. On a little-endian host the conversion is an
//! identity reinterpretation; on a big-endian host the bytes are reversed on the
//! way out and on the way in. The view is a fixed-size array owned by value, so
//! it never allocates and can never read past the value's own storage.

//==================================================================================
// 1. The Trait
//==================================================================================

/// A fixed-width value with a canonical little-endian byte representation.
pub trait ByteView: Copy {
    /// The `[u8; WIDTH]` array holding the little-endian bytes.
    type LeBytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Width of the value in bytes.
    const WIDTH: usize;

    /// Produces the `WIDTH` little-endian bytes of `self`.
    fn to_le_view(self) -> Self::LeBytes;

    /// Reconstructs a value from its `WIDTH` little-endian bytes.
    fn from_le_view(bytes: Self::LeBytes) -> Self;
}

macro_rules! impl_byte_view {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteView for $t {
                type LeBytes = [u8; std::mem::size_of::<$t>()];
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn to_le_view(self) -> Self::LeBytes {
                    self.to_le_bytes()
                }

                #[inline]
                fn from_le_view(bytes: Self::LeBytes) -> Self {
                    <$t>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_byte_view!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

//==================================================================================
// 2. Slice Helpers
//==================================================================================

/// Appends the little-endian bytes of `value` to `out`.
#[inline]
pub fn write_le<T: ByteView>(value: T, out: &mut Vec<u8>) {
    out.extend_from_slice(value.to_le_view().as_ref());
}

/// Reads a value from the first `T::WIDTH` bytes of `bytes`.
///
/// Returns `None` if the slice is too short.
#[inline]
pub fn read_le<T: ByteView>(bytes: &[u8]) -> Option<T> {
    let src = bytes.get(..T::WIDTH)?;
    let mut view = T::LeBytes::default();
    view.as_mut().copy_from_slice(src);
    Some(T::from_le_view(view))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_are_little_endian_on_every_host() {
        assert_eq!(0x0102u16.to_le_view(), [0x02, 0x01]);
        assert_eq!(0x01020304u32.to_le_view(), [0x04, 0x03, 0x02, 0x01]);
        assert_eq!((-2i16).to_le_view(), [0xfe, 0xff]);
        // 10.0f32 == 0x41200000
        assert_eq!(10.0f32.to_le_view(), [0x00, 0x00, 0x20, 0x41]);
        assert_eq!(7u8.to_le_view(), [7]);
    }

    #[test]
    fn test_view_roundtrip_preserves_bits() {
        let nan = f64::from_bits(0x7ff8_dead_beef_0001);
        let back = f64::from_le_view(nan.to_le_view());
        assert_eq!(back.to_bits(), nan.to_bits());

        assert_eq!(i64::from_le_view(i64::MIN.to_le_view()), i64::MIN);
        assert_eq!(u64::from_le_view(u64::MAX.to_le_view()), u64::MAX);
        assert_eq!(<i8 as ByteView>::WIDTH, 1);
        assert_eq!(<f64 as ByteView>::WIDTH, 8);
    }

    #[test]
    fn test_read_and_write_helpers() {
        let mut out = Vec::new();
        write_le(0xAABBu16, &mut out);
        write_le(1u64, &mut out);
        assert_eq!(out, vec![0xBB, 0xAA, 1, 0, 0, 0, 0, 0, 0, 0]);

        assert_eq!(read_le::<u16>(&out), Some(0xAABB));
        assert_eq!(read_le::<u64>(&out[2..]), Some(1));
        assert_eq!(read_le::<u64>(&out[3..]), None);
    }
}
