//! Growable byte buffer with an implicit null terminator.

use crate::error::{BufferError, BufferResult};
use crate::policy::GrowthPolicy;
use std::ffi::CStr;
use std::fmt;
use tracing::{debug, trace, warn};

/// Byte kept one past the content whenever storage exists.
const TERMINATOR: u8 = 0;

/// A growable, exclusively owned byte string.
///
/// The buffer keeps a zero byte one past its logical content whenever it
/// owns storage, so [`as_c_str`](Self::as_c_str) never copies. The
/// terminator counts toward [`capacity`](Self::capacity) but never toward
/// [`len`](Self::len).
///
/// # Storage states
///
/// - `capacity() == 0`: no storage is owned. This is the state of
///   [`Buffer::new`], of a buffer after [`take`](Self::take) or
///   [`destroy`](Self::destroy).
/// - `capacity() > 0`: storage holds `len()` content bytes followed by the
///   terminator.
///
/// Every allocation goes through the fallible allocator API. When storage
/// cannot be obtained the operation returns
/// [`BufferError::AllocationFailure`] and the buffer is left unchanged.
///
/// # Example
///
/// ```rust
/// use strbuf_core::Buffer;
///
/// let mut buf = Buffer::from_bytes(b"held").unwrap();
/// buf.insert(0, b'w').unwrap();
/// buf.erase_range(1, 2).unwrap();
/// assert_eq!(buf.as_bytes(), b"weld");
/// assert_eq!(buf.as_bytes_with_nul(), b"weld\0");
/// ```
#[derive(Clone, Default)]
pub struct Buffer {
    /// Content followed by the terminator, or empty with no allocation.
    data: Vec<u8>,
    policy: GrowthPolicy,
}

impl Buffer {
    /// Creates an empty buffer without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer that grows according to `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: Vec::new(),
            policy,
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// Exactly `bytes.len() + 1` bytes are allocated, so even an empty
    /// input produces an allocated buffer holding only the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn from_bytes(bytes: &[u8]) -> BufferResult<Self> {
        let mut buf = Self::new();
        buf.assign(bytes)?;
        Ok(buf)
    }

    /// Returns the growth policy of this buffer.
    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Replaces the growth policy used by future reallocations.
    pub fn set_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    /// Returns the number of content bytes, excluding the terminator.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Returns true if the buffer holds no content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated bytes, terminator slot included.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns true if the buffer owns storage.
    #[inline]
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.capacity() > 0
    }

    /// Position of the first byte. Always 0.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> usize {
        0
    }

    /// Position one past the last byte.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.len()
    }

    /// Returns the content bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.data[..len]
    }

    /// Returns the content bytes mutably.
    ///
    /// The terminator is not part of the slice and cannot be overwritten.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.data[..len]
    }

    /// Returns the content followed by the terminator.
    ///
    /// For a buffer without storage this is a static `b"\0"`.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.data.is_empty() {
            b"\0"
        } else {
            &self.data
        }
    }

    /// Returns a C string view of the buffer.
    ///
    /// The view borrows the buffer's own storage and is valid until the next
    /// mutation. Content containing interior zero bytes is seen by C
    /// consumers only up to the first zero, so the view stops there too.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Returns the byte at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Returns the byte at `index`, clamping out-of-range reads.
    ///
    /// An index at or past [`len`](Self::len) reads the terminator slot and
    /// yields `0` instead of failing.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> u8 {
        let clamped = index.min(self.len());
        self.data.get(clamped).copied().unwrap_or(TERMINATOR)
    }

    /// Returns the first byte, if any.
    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Returns the last byte, if any.
    #[must_use]
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Returns an iterator over the content bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Replaces the whole content with a copy of `bytes`.
    ///
    /// Existing storage is reused when it is large enough and is never
    /// shrunk. Otherwise exactly `bytes.len() + 1` bytes are allocated.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn assign(&mut self, bytes: &[u8]) -> BufferResult<()> {
        let required = Self::with_terminator(bytes.len())?;
        self.grow_exact(required)?;
        self.edit(|content| {
            content.clear();
            content.extend_from_slice(bytes);
        });
        Ok(())
    }

    /// Ensures that [`capacity`](Self::capacity) is at least `n`.
    ///
    /// Never decreases capacity. When growth is needed the growth policy
    /// decides the final size.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn reserve(&mut self, n: usize) -> BufferResult<()> {
        if n == 0 {
            return Ok(());
        }
        self.grow_amortized(n)
    }

    /// Appends a byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn push(&mut self, byte: u8) -> BufferResult<()> {
        let required = Self::with_terminator(self.len().saturating_add(1))?;
        self.grow_amortized(required)?;
        self.edit(|content| content.push(byte));
        Ok(())
    }

    /// Removes and returns the last byte.
    ///
    /// Popping an empty buffer does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.edit(Vec::pop)
    }

    /// Appends a run of bytes with at most one reallocation.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn append(&mut self, bytes: &[u8]) -> BufferResult<()> {
        self.insert_bytes(self.len(), bytes).map(|_| ())
    }

    /// Inserts `byte` before `position` and returns the position of the
    /// inserted byte.
    ///
    /// `position` must be in `0..=len()`. Inserting at `len()` is a push.
    ///
    /// # Errors
    ///
    /// - [`BufferError::PreconditionViolation`] if `position > len()`.
    /// - [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn insert(&mut self, position: usize, byte: u8) -> BufferResult<usize> {
        self.check_position("insert", position, self.len())?;
        let required = Self::with_terminator(self.len().saturating_add(1))?;
        self.grow_amortized(required)?;
        self.edit(|content| content.insert(position, byte));
        Ok(position)
    }

    /// Inserts a copy of `bytes` before `position` and returns the position
    /// of the first inserted byte.
    ///
    /// Storage grows at most once and the tail is shifted once, regardless
    /// of how many bytes are inserted.
    ///
    /// # Errors
    ///
    /// - [`BufferError::PreconditionViolation`] if `position > len()`.
    /// - [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn insert_bytes(&mut self, position: usize, bytes: &[u8]) -> BufferResult<usize> {
        self.check_position("insert_bytes", position, self.len())?;
        if bytes.is_empty() {
            return Ok(position);
        }
        let grown = self
            .len()
            .checked_add(bytes.len())
            .ok_or_else(|| BufferError::allocation_failure(usize::MAX))?;
        let required = Self::with_terminator(grown)?;
        self.grow_amortized(required)?;
        self.edit(|content| {
            content.splice(position..position, bytes.iter().copied());
        });
        Ok(position)
    }

    /// Removes the byte at `position`.
    ///
    /// Returns the position of the byte that followed the erased one, which
    /// equals `position` (and equals [`end`](Self::end) if the last byte was
    /// erased).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PreconditionViolation`] if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> BufferResult<usize> {
        if position >= self.len() {
            return Err(self.violation(
                "erase",
                format!("position {position} out of range for length {}", self.len()),
            ));
        }
        self.edit(|content| content.remove(position));
        Ok(position)
    }

    /// Removes the bytes in `first..last` and returns `first`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PreconditionViolation`] unless
    /// `first <= last <= len()`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> BufferResult<usize> {
        if first > last || last > self.len() {
            return Err(self.violation(
                "erase_range",
                format!(
                    "range {first}..{last} out of bounds for length {}",
                    self.len()
                ),
            ));
        }
        if first < last {
            self.edit(|content| {
                content.drain(first..last);
            });
        }
        Ok(first)
    }

    /// Truncates to `new_len` or extends with zero bytes up to `new_len`.
    ///
    /// Truncation never releases storage.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    pub fn resize(&mut self, new_len: usize) -> BufferResult<()> {
        if new_len > self.len() {
            let required = Self::with_terminator(new_len)?;
            self.grow_amortized(required)?;
        }
        self.edit(|content| content.resize(new_len, 0));
        Ok(())
    }

    /// Asks the allocator to reduce capacity to `len() + 1`.
    ///
    /// This is a non-binding request; content and length never change.
    pub fn shrink_to_fit(&mut self) {
        let before = self.capacity();
        self.data.shrink_to_fit();
        if self.capacity() != before {
            trace!(old = before, new = self.capacity(), "buffer storage shrunk");
        }
    }

    /// Removes all content, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.edit(Vec::clear);
    }

    /// Moves the storage out into a new buffer, leaving `self` empty and
    /// unallocated.
    ///
    /// O(1); never allocates.
    #[doc(alias = "move_out")]
    #[must_use]
    pub fn take(&mut self) -> Self {
        let policy = self.policy;
        std::mem::replace(self, Self::with_policy(policy))
    }

    /// Creates an independent deep copy sized to the current content.
    ///
    /// Unlike [`Clone`], which aborts when the allocator refuses, this
    /// reports the failure.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if storage cannot be obtained.
    #[doc(alias = "copy")]
    pub fn try_clone(&self) -> BufferResult<Self> {
        let mut copy = Self::with_policy(self.policy);
        if self.is_allocated() {
            copy.assign(self.as_bytes())?;
        }
        Ok(copy)
    }

    /// Exchanges storage, length and capacity with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Releases any owned storage and resets to the empty state.
    ///
    /// Dropping a buffer does the same automatically.
    pub fn destroy(&mut self) {
        self.data = Vec::new();
    }

    /// Length plus the terminator slot, rejecting overflow.
    fn with_terminator(len: usize) -> BufferResult<usize> {
        len.checked_add(1)
            .ok_or_else(|| BufferError::allocation_failure(usize::MAX))
    }

    fn check_position(
        &self,
        operation: &'static str,
        position: usize,
        limit: usize,
    ) -> BufferResult<()> {
        if position > limit {
            return Err(self.violation(
                operation,
                format!("position {position} out of range for length {}", self.len()),
            ));
        }
        Ok(())
    }

    fn violation(&self, operation: &'static str, message: String) -> BufferError {
        debug!(operation, len = self.len(), %message, "rejected out-of-range argument");
        BufferError::precondition(operation, message)
    }

    fn grow_amortized(&mut self, required: usize) -> BufferResult<()> {
        if self.capacity() >= required {
            return Ok(());
        }
        let target = self.policy.next_capacity(self.capacity(), required);
        self.reallocate(target)
    }

    fn grow_exact(&mut self, required: usize) -> BufferResult<()> {
        if self.capacity() >= required {
            return Ok(());
        }
        self.reallocate(required)
    }

    /// Grows storage to at least `target` bytes and ensures the terminator
    /// exists. Leaves the buffer untouched on failure.
    fn reallocate(&mut self, target: usize) -> BufferResult<()> {
        let old = self.capacity();
        let additional = target.saturating_sub(self.data.len());
        if let Err(e) = self.data.try_reserve_exact(additional) {
            warn!(old, requested = target, error = %e, "buffer allocation failed");
            return Err(BufferError::allocation_failure(target));
        }
        trace!(old, new = self.capacity(), "buffer storage grown");
        if self.data.is_empty() {
            self.data.push(TERMINATOR);
        }
        Ok(())
    }

    /// Runs `f` over the bare content and restores the terminator.
    ///
    /// Callers must have grown the storage beforehand so that re-adding the
    /// terminator never reallocates.
    fn edit<R>(&mut self, f: impl FnOnce(&mut Vec<u8>) -> R) -> R {
        let terminated = self.data.pop().is_some();
        let out = f(&mut self.data);
        if terminated || !self.data.is_empty() {
            self.data.push(TERMINATOR);
        }
        debug_assert!(self.data.len() <= self.data.capacity());
        debug_assert!(self.data.last().map_or(true, |&b| b == TERMINATOR));
        out
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("content", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for Buffer {
    type Error = BufferError;

    fn try_from(bytes: &[u8]) -> BufferResult<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for Buffer {
    type Error = BufferError;

    fn try_from(text: &str) -> BufferResult<Self> {
        Self::from_bytes(text.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(bytes: &[u8]) -> Buffer {
        Buffer::from_bytes(bytes).unwrap()
    }

    /// Checks the storage invariants through the public surface.
    fn assert_invariants(b: &Buffer) {
        assert!(b.len() <= b.capacity());
        if b.is_allocated() {
            assert!(b.len() < b.capacity());
            assert_eq!(b.as_bytes_with_nul()[b.len()], 0);
            assert_eq!(b.as_bytes_with_nul().len(), b.len() + 1);
        } else {
            assert_eq!(b.len(), 0);
        }
    }

    #[test]
    fn new_is_unallocated() {
        let b = Buffer::new();
        assert_eq!(b.len(), 0);
        assert_eq!(b.capacity(), 0);
        assert!(!b.is_allocated());
        assert_eq!(b.as_bytes_with_nul(), b"\0");
        assert_eq!(b.as_c_str(), c"");
    }

    #[test]
    fn from_empty_allocates_terminator_only() {
        let b = buf(b"");
        assert_eq!(b.len(), 0);
        assert!(b.is_allocated());
        assert_eq!(b.as_c_str(), c"");
        assert_invariants(&b);
    }

    #[test]
    fn from_bytes_copies_content() {
        let b = buf(b"abc");
        assert_eq!(b.as_bytes(), b"abc");
        assert_eq!(b.len(), 3);
        assert!(b.capacity() >= 4);
        assert_eq!(b.as_c_str(), c"abc");
    }

    #[test]
    fn try_from_str() {
        let b = Buffer::try_from("xyz").unwrap();
        assert_eq!(b.as_bytes(), b"xyz");
    }

    #[test]
    fn assign_reuses_storage() {
        let mut b = buf(b"a long initial value");
        let cap = b.capacity();
        b.assign(b"short").unwrap();
        assert_eq!(b.as_bytes(), b"short");
        assert_eq!(b.capacity(), cap);
        assert_invariants(&b);
    }

    #[test]
    fn assign_grows_when_needed() {
        let mut b = buf(b"ab");
        b.assign(b"abcdefgh").unwrap();
        assert_eq!(b.as_bytes(), b"abcdefgh");
        assert_invariants(&b);
    }

    #[test]
    fn reserve_never_decreases() {
        let mut b = Buffer::new();
        b.reserve(100).unwrap();
        assert!(b.capacity() >= 100);
        let cap = b.capacity();
        b.reserve(10).unwrap();
        assert_eq!(b.capacity(), cap);
        assert_eq!(b.len(), 0);
        assert_invariants(&b);
    }

    #[test]
    fn reserve_zero_does_not_allocate() {
        let mut b = Buffer::new();
        b.reserve(0).unwrap();
        assert!(!b.is_allocated());
    }

    #[test]
    fn reserve_impossible_size_fails_cleanly() {
        let mut b = buf(b"keep");
        let cap = b.capacity();
        let err = b.reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::AllocationFailure { .. }));
        assert_eq!(b.as_bytes(), b"keep");
        assert_eq!(b.capacity(), cap);
        assert_invariants(&b);
    }

    #[test]
    fn push_and_pop() {
        let mut b = Buffer::new();
        b.push(b'x').unwrap();
        b.push(b'y').unwrap();
        assert_eq!(b.as_bytes(), b"xy");
        assert_eq!(b.pop(), Some(b'y'));
        assert_eq!(b.as_bytes(), b"x");
        assert_invariants(&b);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut b = Buffer::new();
        assert_eq!(b.pop(), None);
        assert!(!b.is_allocated());

        let mut b = buf(b"");
        assert_eq!(b.pop(), None);
        assert_invariants(&b);
    }

    #[test]
    fn first_push_uses_min_capacity() {
        let mut b = Buffer::new();
        b.push(b'a').unwrap();
        assert_eq!(b.capacity(), 16);
    }

    #[test]
    fn push_grows_when_terminator_slot_is_needed() {
        let mut b = Buffer::with_policy(GrowthPolicy::new().min_capacity(0));
        b.assign(b"abc").unwrap();
        assert_eq!(b.capacity(), 4);
        b.push(b'd').unwrap();
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.as_c_str(), c"abcd");
    }

    #[test]
    fn push_reallocations_are_logarithmic() {
        let mut b = Buffer::new();
        let mut reallocations = 0;
        let mut last_cap = b.capacity();
        for i in 0..10_000u32 {
            b.push((i % 251) as u8).unwrap();
            if b.capacity() != last_cap {
                reallocations += 1;
                last_cap = b.capacity();
            }
        }
        assert_eq!(b.len(), 10_000);
        // 16 -> 32 -> ... -> 16384 is 11 steps.
        assert!(reallocations <= 12, "got {reallocations} reallocations");
    }

    #[test]
    fn insert_shifts_tail() {
        let mut b = buf(b"ac");
        assert_eq!(b.insert(1, b'b').unwrap(), 1);
        assert_eq!(b.as_bytes(), b"abc");
        assert_eq!(b.insert(0, b'>').unwrap(), 0);
        assert_eq!(b.insert(4, b'<').unwrap(), 4);
        assert_eq!(b.as_bytes(), b">abc<");
        assert_invariants(&b);
    }

    #[test]
    fn insert_into_unallocated() {
        let mut b = Buffer::new();
        b.insert(0, b'z').unwrap();
        assert_eq!(b.as_c_str(), c"z");
    }

    #[test]
    fn insert_out_of_range_is_rejected() {
        let mut b = buf(b"ab");
        let err = b.insert(3, b'x').unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(b.as_bytes(), b"ab");
    }

    #[test]
    fn insert_bytes_in_middle() {
        let mut b = buf(b"held");
        assert_eq!(b.insert_bytes(2, b"LLOW").unwrap(), 2);
        assert_eq!(b.as_bytes(), b"heLLOWld");
        assert_invariants(&b);
    }

    #[test]
    fn insert_bytes_grows_once() {
        let mut b = Buffer::with_policy(GrowthPolicy::new().min_capacity(0));
        b.assign(b"ab").unwrap();
        let payload = vec![b'x'; 1000];
        b.insert_bytes(1, &payload).unwrap();
        // A single step straight to the required size.
        assert_eq!(b.capacity(), 1003);
        assert_eq!(b.len(), 1002);
        assert_eq!(b.front(), Some(b'a'));
        assert_eq!(b.back(), Some(b'b'));
    }

    #[test]
    fn insert_empty_bytes_is_noop() {
        let mut b = Buffer::new();
        assert_eq!(b.insert_bytes(0, b"").unwrap(), 0);
        assert!(!b.is_allocated());
        assert!(b.insert_bytes(1, b"").unwrap_err().is_precondition());
    }

    #[test]
    fn append_extends() {
        let mut b = buf(b"foo");
        b.append(b"bar").unwrap();
        assert_eq!(b.as_bytes(), b"foobar");
    }

    #[test]
    fn erase_returns_following_position() {
        let mut b = buf(b"abc");
        assert_eq!(b.erase(1).unwrap(), 1);
        assert_eq!(b.as_bytes(), b"ac");
        assert_eq!(b.at(1), b'c');

        assert_eq!(b.erase(1).unwrap(), 1);
        assert_eq!(b.end(), 1);
        assert_invariants(&b);
    }

    #[test]
    fn erase_out_of_range_is_rejected() {
        let mut b = buf(b"abc");
        assert!(b.erase(3).unwrap_err().is_precondition());
        assert!(Buffer::new().erase(0).unwrap_err().is_precondition());
        assert_eq!(b.as_bytes(), b"abc");
    }

    #[test]
    fn erase_range_middle_and_tail() {
        let mut b = buf(b"abc");
        assert_eq!(b.erase_range(1, 3).unwrap(), 1);
        assert_eq!(b.as_bytes(), b"a");
        assert_invariants(&b);

        let mut b = buf(b"abcdef");
        b.erase_range(1, 4).unwrap();
        assert_eq!(b.as_bytes(), b"aef");
    }

    #[test]
    fn erase_empty_range_is_noop() {
        let mut b = buf(b"abc");
        assert_eq!(b.erase_range(3, 3).unwrap(), 3);
        assert_eq!(b.as_bytes(), b"abc");
    }

    #[test]
    fn erase_range_rejects_bad_bounds() {
        let mut b = buf(b"abc");
        assert!(b.erase_range(2, 1).unwrap_err().is_precondition());
        assert!(b.erase_range(0, 4).unwrap_err().is_precondition());
        assert_eq!(b.as_bytes(), b"abc");
    }

    #[test]
    fn resize_truncates_without_shrinking() {
        let mut b = buf(b"abcdef");
        let cap = b.capacity();
        b.resize(2).unwrap();
        assert_eq!(b.as_bytes(), b"ab");
        assert_eq!(b.capacity(), cap);
        assert_invariants(&b);
    }

    #[test]
    fn resize_extends_with_zeros() {
        let mut b = buf(b"ab");
        b.resize(5).unwrap();
        assert_eq!(b.as_bytes(), b"ab\0\0\0");
        assert_eq!(b.len(), 5);
        // C consumers stop at the first zero byte.
        assert_eq!(b.as_c_str(), c"ab");
        assert_invariants(&b);
    }

    #[test]
    fn resize_unallocated_to_zero_stays_unallocated() {
        let mut b = Buffer::new();
        b.resize(0).unwrap();
        assert!(!b.is_allocated());
    }

    #[test]
    fn shrink_to_fit_keeps_content() {
        let mut b = Buffer::new();
        b.reserve(256).unwrap();
        b.append(b"abc").unwrap();
        b.shrink_to_fit();
        assert_eq!(b.as_bytes(), b"abc");
        assert!(b.capacity() >= 4);
        assert!(b.capacity() < 256);
        assert_invariants(&b);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut b = buf(b"abc");
        let cap = b.capacity();
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.capacity(), cap);
        assert_eq!(b.as_c_str(), c"");
        assert_invariants(&b);
    }

    #[test]
    fn clear_unallocated_does_not_allocate() {
        let mut b = Buffer::new();
        b.clear();
        assert!(!b.is_allocated());
    }

    #[test]
    fn take_moves_storage() {
        let mut a = buf(b"moved");
        let ptr = a.as_bytes().as_ptr();
        let b = a.take();
        assert_eq!(b.as_bytes(), b"moved");
        assert_eq!(b.as_bytes().as_ptr(), ptr);
        assert_eq!(a.len(), 0);
        assert!(!a.is_allocated());
    }

    #[test]
    fn take_preserves_policy_on_source() {
        let policy = GrowthPolicy::new().min_capacity(64);
        let mut a = Buffer::with_policy(policy);
        a.push(b'a').unwrap();
        let b = a.take();
        assert_eq!(a.policy(), policy);
        assert_eq!(b.policy(), policy);
    }

    #[test]
    fn try_clone_is_independent() {
        let mut a = buf(b"shared");
        let mut b = a.try_clone().unwrap();
        b.push(b'!').unwrap();
        a.erase(0).unwrap();
        assert_eq!(a.as_bytes(), b"hared");
        assert_eq!(b.as_bytes(), b"shared!");
    }

    #[test]
    fn try_clone_is_sized_to_content() {
        let mut a = Buffer::new();
        a.reserve(512).unwrap();
        a.append(b"xy").unwrap();
        let b = a.try_clone().unwrap();
        assert_eq!(b.capacity(), 3);
        assert!(!Buffer::new().try_clone().unwrap().is_allocated());
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = buf(b"first");
        let mut b = Buffer::new();
        let cap = a.capacity();
        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert_eq!(b.as_bytes(), b"first");
        assert_eq!(b.capacity(), cap);
    }

    #[test]
    fn destroy_releases_storage() {
        let mut b = buf(b"gone");
        b.destroy();
        assert_eq!(b.len(), 0);
        assert_eq!(b.capacity(), 0);
        b.destroy();
        assert!(!b.is_allocated());
    }

    #[test]
    fn at_clamps_to_terminator() {
        let b = buf(b"ab");
        assert_eq!(b.at(0), b'a');
        assert_eq!(b.at(1), b'b');
        assert_eq!(b.at(2), 0);
        assert_eq!(b.at(999), 0);
        assert_eq!(Buffer::new().at(5), 0);
    }

    #[test]
    fn get_front_back() {
        let b = buf(b"xyz");
        assert_eq!(b.get(1), Some(b'y'));
        assert_eq!(b.get(3), None);
        assert_eq!(b.front(), Some(b'x'));
        assert_eq!(b.back(), Some(b'z'));
        assert_eq!(Buffer::new().front(), None);
        assert_eq!(Buffer::new().back(), None);
    }

    #[test]
    fn as_bytes_mut_cannot_reach_terminator() {
        let mut b = buf(b"abc");
        b.as_bytes_mut().fill(b'q');
        assert_eq!(b.as_bytes_with_nul(), b"qqq\0");
    }

    #[test]
    fn debug_escapes_content() {
        let b = buf(b"a\n");
        let text = format!("{b:?}");
        assert!(text.contains(r#"content: "a\n""#), "{text}");
        assert!(text.contains("len: 2"));
    }

    #[test]
    fn iterates_content() {
        let b = buf(b"abc");
        let collected: Vec<u8> = b.iter().copied().collect();
        assert_eq!(collected, b"abc");
        assert_eq!((&b).into_iter().count(), 3);
    }
}
