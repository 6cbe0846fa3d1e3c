//! CLI command implementations.

pub mod bits;
pub mod decimal;
pub mod sort;

use clap::ValueEnum;
use strbuf_core::BufferError;
use thiserror::Error;

/// Integer types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntKind {
    /// Signed 8-bit.
    I8,
    /// Unsigned 8-bit.
    U8,
    /// Signed 16-bit.
    I16,
    /// Unsigned 16-bit.
    U16,
    /// Signed 32-bit.
    I32,
    /// Unsigned 32-bit.
    U32,
    /// Signed 64-bit.
    I64,
    /// Unsigned 64-bit.
    U64,
}

/// Float precisions accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FloatKind {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Widest host float.
    Extended,
}

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A value could not be parsed as the requested type.
    #[error("invalid {kind} value: {value:?}")]
    InvalidValue {
        /// Requested type name.
        kind: &'static str,
        /// Offending input.
        value: String,
    },

    /// A buffer operation failed.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses `value` as `T`, naming `kind` in the error.
pub fn parse_value<T: std::str::FromStr>(
    kind: &'static str,
    value: &str,
) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidValue {
        kind,
        value: value.to_string(),
    })
}
