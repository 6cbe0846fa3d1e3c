//! Decimal text rendering of numbers into new buffers.
//!
//! The set of supported numeric kinds is closed, so dispatch happens over
//! the [`Number`] enum. [`ToDecimal`] maps each primitive onto its variant;
//! 8-bit integers are widened to the 16-bit variants.
//!
//! Text comes from the standard formatter: integers in minimal form with a
//! sign only when negative, floats in the shortest form that parses back to
//! the same value.

use crate::buffer::Buffer;
use crate::error::BufferResult;

/// A number tagged with its width, signedness or precision class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Single-precision float.
    F32(f32),
    /// Double-precision float.
    F64(f64),
    /// Extended-precision float.
    ///
    /// Rust has no native type wider than `f64`, so the value is carried and
    /// rendered at double precision.
    Extended(f64),
}

impl Number {
    /// Renders the number into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
    /// if storage cannot be obtained.
    pub fn to_decimal(self) -> BufferResult<Buffer> {
        let text = match self {
            Self::I16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) | Self::Extended(v) => v.to_string(),
        };
        Buffer::from_bytes(text.as_bytes())
    }
}

/// Primitive numbers that can be rendered as decimal text.
///
/// ```rust
/// use strbuf_core::ToDecimal;
///
/// assert_eq!(42u8.to_decimal().unwrap(), "42");
/// assert_eq!((-7i64).to_decimal().unwrap(), "-7");
/// assert_eq!(0.5f32.to_decimal().unwrap(), "0.5");
/// ```
pub trait ToDecimal {
    /// Returns the tagged form of this value.
    fn to_number(&self) -> Number;

    /// Renders this value into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
    /// if storage cannot be obtained.
    fn to_decimal(&self) -> BufferResult<Buffer> {
        self.to_number().to_decimal()
    }
}

macro_rules! impl_to_decimal {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl ToDecimal for $ty {
                fn to_number(&self) -> Number {
                    Number::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

impl_to_decimal! {
    i8 => I16 as i16,
    u8 => U16 as u16,
    i16 => I16 as i16,
    u16 => U16 as u16,
    i32 => I32 as i32,
    u32 => U32 as u32,
    i64 => I64 as i64,
    u64 => U64 as u64,
    f32 => F32 as f32,
    f64 => F64 as f64,
}

impl ToDecimal for isize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_number(&self) -> Number {
        Number::I64(*self as i64)
    }
}

impl ToDecimal for usize {
    #[allow(clippy::cast_possible_truncation)]
    fn to_number(&self) -> Number {
        Number::U64(*self as u64)
    }
}

/// Width of an integer decimal conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

/// Precision class of a floating decimal conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPrecision {
    /// 32-bit float.
    Single,
    /// 64-bit float.
    Double,
    /// Widest float the host supports; `f64` in Rust.
    Extended,
}

/// Renders a signed integer at the given width.
///
/// The value is first narrowed to `width` with two's-complement wrapping,
/// as a C cast would.
///
/// # Errors
///
/// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
/// if storage cannot be obtained.
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_from_signed(width: IntWidth, value: i64) -> BufferResult<Buffer> {
    let number = match width {
        IntWidth::W16 => Number::I16(value as i16),
        IntWidth::W32 => Number::I32(value as i32),
        IntWidth::W64 => Number::I64(value),
    };
    number.to_decimal()
}

/// Renders an unsigned integer at the given width, narrowing like
/// [`decimal_from_signed`].
///
/// # Errors
///
/// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
/// if storage cannot be obtained.
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_from_unsigned(width: IntWidth, value: u64) -> BufferResult<Buffer> {
    let number = match width {
        IntWidth::W16 => Number::U16(value as u16),
        IntWidth::W32 => Number::U32(value as u32),
        IntWidth::W64 => Number::U64(value),
    };
    number.to_decimal()
}

/// Renders a float at the given precision class.
///
/// # Errors
///
/// Returns [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
/// if storage cannot be obtained.
#[allow(clippy::cast_possible_truncation)]
pub fn decimal_from_float(precision: FloatPrecision, value: f64) -> BufferResult<Buffer> {
    let number = match precision {
        FloatPrecision::Single => Number::F32(value as f32),
        FloatPrecision::Double => Number::F64(value),
        FloatPrecision::Extended => Number::Extended(value),
    };
    number.to_decimal()
}
