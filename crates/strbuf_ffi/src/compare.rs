//! Comparison FFI functions.

use crate::types::StrBufHandle;
use std::cmp::Ordering;
use std::ffi::{c_char, c_int, c_void, CStr};
use strbuf_core::{ascending, descending, Buffer};

fn to_c(ordering: Ordering) -> c_int {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Bytes of a possibly-null handle; null compares as the empty string.
unsafe fn handle_bytes<'a>(handle: *const StrBufHandle) -> &'a [u8] {
    StrBufHandle::as_ref(handle).map_or(&[][..], Buffer::as_bytes)
}

/// Bytes of a possibly-null C string; null compares as the empty string.
unsafe fn c_str_bytes<'a>(s: *const c_char) -> &'a [u8] {
    if s.is_null() {
        &[]
    } else {
        CStr::from_ptr(s).to_bytes()
    }
}

/// Compares two buffers. Returns negative, zero or positive.
///
/// # Safety
///
/// Both handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn strbuf_compare(lhs: *const StrBufHandle, rhs: *const StrBufHandle) -> c_int {
    to_c(handle_bytes(lhs).cmp(handle_bytes(rhs)))
}

/// Compares a buffer with a C string.
///
/// # Safety
///
/// `lhs` must be null or live; `rhs` null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn strbuf_compare_c(lhs: *const StrBufHandle, rhs: *const c_char) -> c_int {
    to_c(handle_bytes(lhs).cmp(c_str_bytes(rhs)))
}

/// Compares a C string with a buffer.
///
/// # Safety
///
/// `lhs` must be null or a valid null-terminated string; `rhs` null or live.
#[no_mangle]
pub unsafe extern "C" fn strbuf_c_compare(lhs: *const c_char, rhs: *const StrBufHandle) -> c_int {
    to_c(c_str_bytes(lhs).cmp(handle_bytes(rhs)))
}

/// Resolves a `qsort` element, which points at a handle.
unsafe fn element<'a>(item: *const c_void) -> Option<&'a Buffer> {
    let handle = item.cast::<*const StrBufHandle>().as_ref()?;
    StrBufHandle::as_ref(*handle)
}

/// Ascending `qsort` predicate over an array of handles.
///
/// # Safety
///
/// Both arguments must point at elements holding null or live handles.
#[no_mangle]
pub unsafe extern "C" fn strbuf_ascending(lhs: *const c_void, rhs: *const c_void) -> c_int {
    let empty = Buffer::new();
    let a = element(lhs).unwrap_or(&empty);
    let b = element(rhs).unwrap_or(&empty);
    to_c(ascending(a, b))
}

/// Descending `qsort` predicate over an array of handles.
///
/// # Safety
///
/// Both arguments must point at elements holding null or live handles.
#[no_mangle]
pub unsafe extern "C" fn strbuf_descending(lhs: *const c_void, rhs: *const c_void) -> c_int {
    let empty = Buffer::new();
    let a = element(lhs).unwrap_or(&empty);
    let b = element(rhs).unwrap_or(&empty);
    to_c(descending(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string::{strbuf_free, strbuf_from};

    unsafe fn make(s: &CStr) -> *mut StrBufHandle {
        let mut handle = std::ptr::null_mut();
        strbuf_from(s.as_ptr(), &mut handle);
        handle
    }

    #[test]
    fn compare_buffers_and_c_strings() {
        unsafe {
            let ab = make(c"ab");
            let abc = make(c"abc");

            assert_eq!(strbuf_compare(ab, abc), -1);
            assert_eq!(strbuf_compare(abc, ab), 1);
            assert_eq!(strbuf_compare(ab, ab), 0);

            assert_eq!(strbuf_compare_c(ab, c"ab".as_ptr()), 0);
            assert_eq!(strbuf_compare_c(ab, c"b".as_ptr()), -1);
            assert_eq!(strbuf_c_compare(c"b".as_ptr(), ab), 1);

            strbuf_free(ab);
            strbuf_free(abc);
        }
    }

    #[test]
    fn predicates_sort_handle_arrays() {
        unsafe {
            let mut handles = [make(c"pear"), make(c"apple"), make(c"fig")];

            handles.sort_by(|a, b| {
                let a: *const *mut StrBufHandle = a;
                let b: *const *mut StrBufHandle = b;
                strbuf_ascending(a.cast(), b.cast()).cmp(&0)
            });
            assert_eq!(strbuf_compare_c(handles[0], c"apple".as_ptr()), 0);
            assert_eq!(strbuf_compare_c(handles[2], c"pear".as_ptr()), 0);

            let x: *const *mut StrBufHandle = &handles[0];
            let y: *const *mut StrBufHandle = &handles[1];
            assert_eq!(
                strbuf_ascending(x.cast(), y.cast()),
                -strbuf_descending(x.cast(), y.cast())
            );

            for handle in handles {
                strbuf_free(handle);
            }
        }
    }
}
