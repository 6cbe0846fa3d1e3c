//! # strbuf core
//!
//! A growable byte string that always keeps a null terminator one past its
//! content, plus decimal and bit-pattern conversions built on it.
//!
//! This crate provides:
//! - [`Buffer`] with explicit capacity management, positional insertion and
//!   erasure, move and deep-copy semantics
//! - A configurable [`GrowthPolicy`] giving amortized O(1) appends
//! - Lexicographic ordering with [`ascending`]/[`descending`] sort predicates
//! - Decimal rendering of numbers ([`ToDecimal`], [`Number`])
//! - Bit-pattern rendering of integers ([`to_bits`])
//! - Line input from any [`BufRead`](std::io::BufRead)
//!
//! ## Errors
//!
//! Allocation failures are reported as [`BufferError::AllocationFailure`]
//! and never abort; the buffer keeps its previous state. Out-of-range
//! positions passed to mutating operations are reported as
//! [`BufferError::PreconditionViolation`] and are never clamped. Only the
//! read accessor [`Buffer::at`] clamps, yielding the terminator.
//!
//! ## Usage
//!
//! ```
//! use strbuf_core::{u8_to_bits, Buffer};
//!
//! let mut buf = Buffer::try_from("bits: ").unwrap();
//! let mut bits = Buffer::new();
//! u8_to_bits(&mut bits, 5).unwrap();
//! buf.append(bits.as_bytes()).unwrap();
//!
//! assert_eq!(buf, "bits: 00000101");
//! assert_eq!(buf.as_c_str().to_bytes().len(), buf.len());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bits;
mod buffer;
mod compare;
mod decimal;
mod error;
mod line;
mod policy;

pub use bits::{
    i16_to_bits, i32_to_bits, i64_to_bits, i8_to_bits, to_bits, u16_to_bits, u32_to_bits,
    u64_to_bits, u8_to_bits, BitPattern,
};
pub use buffer::Buffer;
pub use compare::{ascending, descending};
pub use decimal::{
    decimal_from_float, decimal_from_signed, decimal_from_unsigned, FloatPrecision, IntWidth,
    Number, ToDecimal,
};
pub use error::{BufferError, BufferResult};
pub use line::{read_line, read_stdin_line};
pub use policy::{GrowthPolicy, DEFAULT_GROWTH_FACTOR, DEFAULT_MIN_CAPACITY};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
