//! # strbuf Testkit
//!
//! Test utilities for strbuf.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - A reference model that replays operation sequences against a `Vec<u8>`
//! - Fuzz testing harnesses
//! - Cross-language test vectors for the bit and decimal conversions
//!
//! ## Usage
//!
//! ```rust
//! use strbuf_testkit::prelude::*;
//!
//! let ops = vec![BufferOp::Push(b'a'), BufferOp::Insert(0, b'b'), BufferOp::Pop];
//! let report = run_ops(&ops).unwrap();
//! assert_eq!(report.content, b"b");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fuzz;
pub mod generators;
pub mod model;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::vectors::*;
}

pub use fuzz::*;
pub use generators::*;
pub use model::*;
pub use vectors::*;
