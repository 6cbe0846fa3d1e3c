//! Error codes and result types.

use std::cell::RefCell;
use std::ffi::CString;
use strbuf_core::BufferError;
use thiserror::Error;

/// Result code for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrBufResult {
    /// Operation succeeded.
    Ok = 0,
    /// Generic error.
    Error = 1,
    /// Position or range outside the buffer.
    OutOfRange = 2,
    /// Out of memory.
    OutOfMemory = 3,
    /// Null pointer.
    NullPointer = 4,
}

impl StrBufResult {
    /// Returns true if the result indicates success.
    pub fn is_ok(self) -> bool {
        self == StrBufResult::Ok
    }

    /// Returns true if the result indicates an error.
    pub fn is_err(self) -> bool {
        self != StrBufResult::Ok
    }
}

/// Error code type for C compatibility.
pub type ErrorCode = i32;

impl From<StrBufResult> for ErrorCode {
    fn from(result: StrBufResult) -> Self {
        result as ErrorCode
    }
}

impl From<ErrorCode> for StrBufResult {
    fn from(code: ErrorCode) -> Self {
        match code {
            0 => StrBufResult::Ok,
            2 => StrBufResult::OutOfRange,
            3 => StrBufResult::OutOfMemory,
            4 => StrBufResult::NullPointer,
            _ => StrBufResult::Error,
        }
    }
}

/// Failures raised while servicing an FFI call.
#[derive(Debug, Error)]
pub enum StrBufError {
    /// A required pointer argument was null.
    #[error("null pointer argument: {0}")]
    NullPointer(&'static str),

    /// The underlying buffer operation failed.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl StrBufError {
    /// Maps this error onto its C result code.
    pub fn code(&self) -> StrBufResult {
        match self {
            Self::NullPointer(_) => StrBufResult::NullPointer,
            Self::Buffer(BufferError::AllocationFailure { .. }) => StrBufResult::OutOfMemory,
            Self::Buffer(BufferError::PreconditionViolation { .. }) => StrBufResult::OutOfRange,
            Self::Buffer(BufferError::Io(_)) => StrBufResult::Error,
        }
    }
}

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Sets the last error message.
pub fn set_last_error(message: impl Into<String>) {
    let msg = message.into();
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clears the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Runs an FFI body, recording any failure as the last error.
pub(crate) fn guard(body: impl FnOnce() -> Result<(), StrBufError>) -> StrBufResult {
    clear_last_error();
    match body() {
        Ok(()) => StrBufResult::Ok,
        Err(e) => {
            tracing::debug!(error = %e, "ffi call failed");
            let code = e.code();
            set_last_error(e.to_string());
            code
        }
    }
}

/// Gets the last error message as a C string.
///
/// Returns null if no error is set.
///
/// # Safety
///
/// The returned pointer is valid until the next FFI call on this thread.
#[no_mangle]
pub extern "C" fn strbuf_get_last_error() -> *const std::ffi::c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(cstr) => cstr.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clears the last error message.
#[no_mangle]
pub extern "C" fn strbuf_clear_error() {
    clear_last_error();
}
