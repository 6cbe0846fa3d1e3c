//! Buffer FFI functions.

use crate::error::{guard, StrBufError, StrBufResult};
use crate::types::StrBufHandle;
use std::ffi::{c_char, CStr};
use strbuf_core::{read_stdin_line, Buffer, ToDecimal};

/// Resolves a handle for mutation.
unsafe fn buffer_mut<'a>(handle: *mut StrBufHandle) -> Result<&'a mut Buffer, StrBufError> {
    StrBufHandle::as_mut(handle).ok_or(StrBufError::NullPointer("handle"))
}

/// Resolves a handle for reading.
unsafe fn buffer_ref<'a>(handle: *const StrBufHandle) -> Result<&'a Buffer, StrBufError> {
    StrBufHandle::as_ref(handle).ok_or(StrBufError::NullPointer("handle"))
}

/// Reads a null-terminated C string argument.
unsafe fn c_bytes<'a>(s: *const c_char, name: &'static str) -> Result<&'a [u8], StrBufError> {
    if s.is_null() {
        return Err(StrBufError::NullPointer(name));
    }
    Ok(CStr::from_ptr(s).to_bytes())
}

/// Writes an optional output position.
unsafe fn write_position(out: *mut usize, position: usize) {
    if !out.is_null() {
        *out = position;
    }
}

#[allow(clippy::cast_sign_loss)]
fn byte(c: c_char) -> u8 {
    c as u8
}

/// Creates an empty buffer. Never allocates storage for the content.
///
/// Release with `strbuf_free`.
#[no_mangle]
pub extern "C" fn strbuf_new() -> *mut StrBufHandle {
    StrBufHandle::into_raw(Buffer::new())
}

/// Creates a buffer holding a copy of a C string.
///
/// # Safety
///
/// - `s` must be a valid null-terminated string
/// - `out_handle` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn strbuf_from(
    s: *const c_char,
    out_handle: *mut *mut StrBufHandle,
) -> StrBufResult {
    guard(|| {
        if out_handle.is_null() {
            return Err(StrBufError::NullPointer("out_handle"));
        }
        let buffer = Buffer::from_bytes(c_bytes(s, "s")?)?;
        *out_handle = StrBufHandle::into_raw(buffer);
        Ok(())
    })
}

/// Replaces the content with a copy of a C string.
///
/// # Safety
///
/// `handle` must be a live handle and `s` a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn strbuf_assign(handle: *mut StrBufHandle, s: *const c_char) -> StrBufResult {
    guard(|| {
        let bytes = c_bytes(s, "s")?;
        buffer_mut(handle)?.assign(bytes)?;
        Ok(())
    })
}

/// Appends one character.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_push(handle: *mut StrBufHandle, c: c_char) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.push(byte(c))?;
        Ok(())
    })
}

/// Removes the last character. Does nothing on an empty buffer.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_pop(handle: *mut StrBufHandle) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.pop();
        Ok(())
    })
}

/// Appends a C string.
///
/// # Safety
///
/// `handle` must be a live handle and `s` a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn strbuf_append(handle: *mut StrBufHandle, s: *const c_char) -> StrBufResult {
    guard(|| {
        let bytes = c_bytes(s, "s")?;
        buffer_mut(handle)?.append(bytes)?;
        Ok(())
    })
}

/// Inserts one character before `position`.
///
/// On success `out_position` (if not null) receives the position of the
/// inserted character.
///
/// # Safety
///
/// `handle` must be a live handle; `out_position` must be null or valid.
#[no_mangle]
pub unsafe extern "C" fn strbuf_insert(
    handle: *mut StrBufHandle,
    position: usize,
    c: c_char,
    out_position: *mut usize,
) -> StrBufResult {
    guard(|| {
        let at = buffer_mut(handle)?.insert(position, byte(c))?;
        write_position(out_position, at);
        Ok(())
    })
}

/// Inserts a C string before `position`.
///
/// On success `out_position` (if not null) receives the position of the
/// first inserted character.
///
/// # Safety
///
/// `handle` must be a live handle, `s` a valid null-terminated string and
/// `out_position` null or valid.
#[no_mangle]
pub unsafe extern "C" fn strbuf_insert_str(
    handle: *mut StrBufHandle,
    position: usize,
    s: *const c_char,
    out_position: *mut usize,
) -> StrBufResult {
    guard(|| {
        let bytes = c_bytes(s, "s")?;
        let at = buffer_mut(handle)?.insert_bytes(position, bytes)?;
        write_position(out_position, at);
        Ok(())
    })
}

/// Erases the character at `position`.
///
/// On success `out_position` (if not null) receives the position of the
/// character that followed the erased one.
///
/// # Safety
///
/// `handle` must be a live handle; `out_position` must be null or valid.
#[no_mangle]
pub unsafe extern "C" fn strbuf_erase(
    handle: *mut StrBufHandle,
    position: usize,
    out_position: *mut usize,
) -> StrBufResult {
    guard(|| {
        let at = buffer_mut(handle)?.erase(position)?;
        write_position(out_position, at);
        Ok(())
    })
}

/// Erases the characters in `[first, last)`.
///
/// # Safety
///
/// `handle` must be a live handle; `out_position` must be null or valid.
#[no_mangle]
pub unsafe extern "C" fn strbuf_erase_range(
    handle: *mut StrBufHandle,
    first: usize,
    last: usize,
    out_position: *mut usize,
) -> StrBufResult {
    guard(|| {
        let at = buffer_mut(handle)?.erase_range(first, last)?;
        write_position(out_position, at);
        Ok(())
    })
}

/// Ensures capacity for at least `n` bytes, terminator included.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_reserve(handle: *mut StrBufHandle, n: usize) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.reserve(n)?;
        Ok(())
    })
}

/// Truncates or zero-extends to `size` characters.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_resize(handle: *mut StrBufHandle, size: usize) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.resize(size)?;
        Ok(())
    })
}

/// Non-binding request to release unused capacity.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_shrink_to_fit(handle: *mut StrBufHandle) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.shrink_to_fit();
        Ok(())
    })
}

/// Moves the storage of `handle` into a new handle, leaving `handle` empty.
///
/// # Safety
///
/// `handle` must be a live handle and `out_handle` a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn strbuf_move(
    handle: *mut StrBufHandle,
    out_handle: *mut *mut StrBufHandle,
) -> StrBufResult {
    guard(|| {
        if out_handle.is_null() {
            return Err(StrBufError::NullPointer("out_handle"));
        }
        let moved = buffer_mut(handle)?.take();
        *out_handle = StrBufHandle::into_raw(moved);
        Ok(())
    })
}

/// Creates a deep copy of `handle`.
///
/// # Safety
///
/// `handle` must be a live handle and `out_handle` a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn strbuf_copy(
    handle: *const StrBufHandle,
    out_handle: *mut *mut StrBufHandle,
) -> StrBufResult {
    guard(|| {
        if out_handle.is_null() {
            return Err(StrBufError::NullPointer("out_handle"));
        }
        let copy = buffer_ref(handle)?.try_clone()?;
        *out_handle = StrBufHandle::into_raw(copy);
        Ok(())
    })
}

/// Exchanges the contents of two buffers.
///
/// # Safety
///
/// Both handles must be live. They may be the same handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_swap(first: *mut StrBufHandle, second: *mut StrBufHandle) -> StrBufResult {
    guard(|| {
        if first.is_null() || second.is_null() {
            return Err(StrBufError::NullPointer("handle"));
        }
        if first == second {
            return Ok(());
        }
        let a = buffer_mut(first)?;
        let b = buffer_mut(second)?;
        a.swap(b);
        Ok(())
    })
}

/// Erases all characters, keeping capacity.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_clear(handle: *mut StrBufHandle) -> StrBufResult {
    guard(|| {
        buffer_mut(handle)?.clear();
        Ok(())
    })
}

/// Reads a line from standard input, replacing the content.
///
/// At end of input the buffer is left empty.
///
/// # Safety
///
/// `handle` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_getline(handle: *mut StrBufHandle) -> StrBufResult {
    guard(|| {
        read_stdin_line(buffer_mut(handle)?)?;
        Ok(())
    })
}

/// Returns a pointer to the null-terminated content.
///
/// The pointer borrows internal storage. Do not modify it and do not use
/// it after the next mutating call on `handle`. Returns null for a null
/// handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_c_str(handle: *const StrBufHandle) -> *const c_char {
    match StrBufHandle::as_ref(handle) {
        Some(buffer) => buffer.as_bytes_with_nul().as_ptr().cast(),
        None => std::ptr::null(),
    }
}

/// Returns the number of characters. Zero for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_len(handle: *const StrBufHandle) -> usize {
    StrBufHandle::as_ref(handle).map_or(0, Buffer::len)
}

/// Returns the allocated capacity. Zero for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn strbuf_capacity(handle: *const StrBufHandle) -> usize {
    StrBufHandle::as_ref(handle).map_or(0, Buffer::capacity)
}

/// Returns the character at `index`, or the terminator if out of range.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
#[allow(clippy::cast_possible_wrap)]
pub unsafe extern "C" fn strbuf_at(handle: *const StrBufHandle, index: usize) -> c_char {
    StrBufHandle::as_ref(handle).map_or(0, |buffer| buffer.at(index) as c_char)
}

/// Releases a buffer. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a live handle, and is invalid afterwards.
#[no_mangle]
pub unsafe extern "C" fn strbuf_free(handle: *mut StrBufHandle) {
    if !handle.is_null() {
        drop(StrBufHandle::from_raw(handle));
    }
}

macro_rules! decimal_exports {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Creates a buffer with the decimal text of a `", stringify!($ty), "`.")]
            ///
            /// # Safety
            ///
            /// `out_handle` must be a valid pointer.
            #[no_mangle]
            pub unsafe extern "C" fn $name(value: $ty, out_handle: *mut *mut StrBufHandle) -> StrBufResult {
                guard(|| {
                    if out_handle.is_null() {
                        return Err(StrBufError::NullPointer("out_handle"));
                    }
                    *out_handle = StrBufHandle::into_raw(value.to_decimal()?);
                    Ok(())
                })
            }
        )*
    };
}

decimal_exports! {
    strbuf_from_i16: i16,
    strbuf_from_i32: i32,
    strbuf_from_i64: i64,
    strbuf_from_u16: u16,
    strbuf_from_u32: u32,
    strbuf_from_u64: u64,
    strbuf_from_f32: f32,
    strbuf_from_f64: f64,
}
