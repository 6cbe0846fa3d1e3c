//! # strbuf FFI
//!
//! Stable C ABI for strbuf.
//!
//! This crate provides:
//! - An opaque heap handle wrapping a [`strbuf_core::Buffer`]
//! - C-compatible exports for every buffer operation
//! - Result codes plus a thread-local last-error message
//! - Sort predicates usable with `qsort` over arrays of handles
//!
//! ## Ownership
//!
//! Handles returned by `strbuf_new`, `strbuf_from` and `strbuf_copy` are
//! owned by the caller and must be released with `strbuf_free`. Pointers
//! returned by `strbuf_c_str` borrow the handle's storage and are
//! invalidated by the next mutating call on that handle.
//!
//! Positions are byte offsets from the start of the content.

#![warn(missing_docs)]

pub mod bits;
pub mod compare;
pub mod error;
pub mod string;
pub mod types;

pub use error::{StrBufResult, StrBufError};
pub use types::StrBufHandle;
