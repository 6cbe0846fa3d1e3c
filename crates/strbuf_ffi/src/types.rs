//! Type definitions for FFI.

use strbuf_core::Buffer;

/// An opaque buffer handle.
///
/// This is a pointer to the internal buffer structure.
/// Never dereference or modify directly.
#[repr(C)]
pub struct StrBufHandle {
    _private: [u8; 0],
}

impl StrBufHandle {
    /// Boxes `buffer` and returns an owning handle.
    pub(crate) fn into_raw(buffer: Buffer) -> *mut Self {
        Box::into_raw(Box::new(buffer)).cast()
    }

    /// Reclaims ownership of a handle created by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `handle` must be non-null, come from `into_raw` and not be used again.
    pub(crate) unsafe fn from_raw(handle: *mut Self) -> Box<Buffer> {
        Box::from_raw(handle.cast::<Buffer>())
    }

    /// Borrows the buffer behind a handle.
    ///
    /// # Safety
    ///
    /// `handle` must be null or a live handle with no outstanding mutable borrow.
    pub(crate) unsafe fn as_ref<'a>(handle: *const Self) -> Option<&'a Buffer> {
        handle.cast::<Buffer>().as_ref()
    }

    /// Mutably borrows the buffer behind a handle.
    ///
    /// # Safety
    ///
    /// `handle` must be null or a live handle with no other outstanding borrow.
    pub(crate) unsafe fn as_mut<'a>(handle: *mut Self) -> Option<&'a mut Buffer> {
        handle.cast::<Buffer>().as_mut()
    }
}
