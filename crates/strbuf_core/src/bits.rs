//! Bit-pattern rendering of fixed-width integers.
//!
//! Bits are produced least significant first and each one is inserted at
//! the front of the output buffer, so the finished pattern reads MSB first.
//! The output is never cleared: a second conversion into the same buffer
//! prepends its bits, leaving the most recent value leftmost.

use crate::buffer::Buffer;
use crate::error::BufferResult;

/// Fixed-width integers whose in-memory bit pattern can be rendered.
pub trait BitPattern: Copy {
    /// Number of bits in the type.
    const WIDTH: u32;

    /// Returns bit `index` of the two's-complement representation,
    /// counting from the least significant bit.
    fn bit(self, index: u32) -> bool;
}

macro_rules! impl_bit_pattern {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitPattern for $ty {
                const WIDTH: u32 = <$ty>::BITS;

                #[inline]
                fn bit(self, index: u32) -> bool {
                    (self >> index) & 1 == 1
                }
            }
        )*
    };
}

impl_bit_pattern!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Prepends the bit pattern of `value` to `out` as ASCII `'0'`/`'1'`.
///
/// Room for all bits is reserved up front, so either every bit lands or
/// `out` is left untouched.
///
/// ```rust
/// use strbuf_core::{to_bits, Buffer};
///
/// let mut out = Buffer::new();
/// to_bits(&mut out, 1u8).unwrap();
/// to_bits(&mut out, 2u8).unwrap();
/// assert_eq!(out, "0000001000000001");
/// ```
///
/// # Errors
///
/// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
/// if storage cannot be obtained.
pub fn to_bits<T: BitPattern>(out: &mut Buffer, value: T) -> BufferResult<()> {
    let width = T::WIDTH as usize;
    out.reserve(out.len() + width + 1)?;
    for index in 0..T::WIDTH {
        let digit = if value.bit(index) { b'1' } else { b'0' };
        out.insert(out.begin(), digit)?;
    }
    Ok(())
}

macro_rules! named_to_bits {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Prepends the bit pattern of a `", stringify!($ty), "` to `out`.")]
            ///
            /// # Errors
            ///
            /// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
            /// if storage cannot be obtained.
            pub fn $name(out: &mut Buffer, value: $ty) -> BufferResult<()> {
                to_bits(out, value)
            }
        )*
    };
}

named_to_bits! {
    i8_to_bits: i8,
    u8_to_bits: u8,
    i16_to_bits: i16,
    u16_to_bits: u16,
    i32_to_bits: i32,
    u32_to_bits: u32,
    i64_to_bits: i64,
    u64_to_bits: u64,
}
