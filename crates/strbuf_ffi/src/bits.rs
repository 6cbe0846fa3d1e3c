//! Bit-pattern FFI functions.

use crate::error::{guard, StrBufError, StrBufResult};
use crate::types::StrBufHandle;
use strbuf_core::to_bits;

macro_rules! bits_exports {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Prepends the bit pattern of a `", stringify!($ty), "` to a buffer.")]
            ///
            /// The buffer is not cleared, so repeated calls accumulate with the
            /// most recent value leftmost.
            ///
            /// # Safety
            ///
            /// `bits` must be a live handle.
            #[no_mangle]
            pub unsafe extern "C" fn $name(bits: *mut StrBufHandle, value: $ty) -> StrBufResult {
                guard(|| {
                    let out = StrBufHandle::as_mut(bits).ok_or(StrBufError::NullPointer("bits"))?;
                    to_bits(out, value)?;
                    Ok(())
                })
            }
        )*
    };
}

bits_exports! {
    strbuf_i8_to_bits: i8,
    strbuf_u8_to_bits: u8,
    strbuf_i16_to_bits: i16,
    strbuf_u16_to_bits: u16,
    strbuf_i32_to_bits: i32,
    strbuf_u32_to_bits: u32,
    strbuf_i64_to_bits: i64,
    strbuf_u64_to_bits: u64,
}
