//! Error types for buffer operations.

use std::io;
use thiserror::Error;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur while working with a [`Buffer`](crate::Buffer).
#[derive(Debug, Error)]
pub enum BufferError {
    /// The allocator could not provide the requested storage.
    ///
    /// The buffer that issued the request is left exactly as it was.
    #[error("allocation failed: could not reserve {requested} bytes")]
    AllocationFailure {
        /// Total capacity that was requested, in bytes.
        requested: usize,
    },

    /// A position or range argument was outside the buffer's bounds.
    #[error("precondition violated in {operation}: {message}")]
    PreconditionViolation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Description of the violated bound.
        message: String,
    },

    /// I/O error raised by a line reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl BufferError {
    /// Create an allocation failure error.
    pub fn allocation_failure(requested: usize) -> Self {
        Self::AllocationFailure { requested }
    }

    /// Create a precondition violation error.
    pub fn precondition(operation: &'static str, message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            operation,
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by the caller passing bad arguments.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionViolation { .. })
    }
}
