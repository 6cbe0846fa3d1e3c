//! Lexicographic ordering and sort predicates.
//!
//! Buffers order byte-wise, with a strict prefix sorting before the longer
//! buffer. Capacity and growth policy never take part in comparisons.

use crate::buffer::Buffer;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Buffer {
    /// Compares two buffers byte-wise.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Compares this buffer with a byte sequence.
    #[must_use]
    pub fn compare_bytes(&self, bytes: &[u8]) -> Ordering {
        self.as_bytes().cmp(bytes)
    }
}

/// Ascending sort predicate.
///
/// ```rust
/// use strbuf_core::{ascending, Buffer};
///
/// let mut items: Vec<Buffer> = ["pear", "apple", "app"]
///     .into_iter()
///     .map(|s| Buffer::try_from(s).unwrap())
///     .collect();
/// items.sort_by(ascending);
/// assert_eq!(items[0], "app");
/// ```
#[must_use]
pub fn ascending(a: &Buffer, b: &Buffer) -> Ordering {
    a.compare(b)
}

/// Descending sort predicate; the exact inverse of [`ascending`].
#[must_use]
pub fn descending(a: &Buffer, b: &Buffer) -> Ordering {
    b.compare(a)
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buffer {}

impl PartialOrd for Buffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Buffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Buffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for Buffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Buffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<Buffer> for [u8] {
    fn eq(&self, other: &Buffer) -> bool {
        self == other.as_bytes()
    }
}

impl PartialOrd<[u8]> for Buffer {
    fn partial_cmp(&self, other: &[u8]) -> Option<Ordering> {
        Some(self.compare_bytes(other))
    }
}

impl PartialOrd<Buffer> for [u8] {
    fn partial_cmp(&self, other: &Buffer) -> Option<Ordering> {
        Some(self.cmp(other.as_bytes()))
    }
}
