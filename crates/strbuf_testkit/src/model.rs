//! Reference model for buffer operation sequences.
//!
//! Every operation is applied both to a [`Buffer`] and to a plain `Vec<u8>`.
//! After each step the two must hold the same bytes, the buffer must keep
//! its terminator, and out-of-range positions must be rejected exactly when
//! the model says they are out of range.

use std::fmt;
use strbuf_core::{Buffer, BufferError};

/// A single mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferOp {
    /// Append one byte.
    Push(u8),
    /// Remove the last byte, if any.
    Pop,
    /// Append a run of bytes.
    Append(Vec<u8>),
    /// Insert one byte at a position (possibly out of range).
    Insert(usize, u8),
    /// Insert a run of bytes at a position (possibly out of range).
    InsertBytes(usize, Vec<u8>),
    /// Erase the byte at a position (possibly out of range).
    Erase(usize),
    /// Erase a range (possibly invalid).
    EraseRange(usize, usize),
    /// Truncate or zero-extend.
    Resize(usize),
    /// Ensure a minimum capacity.
    Reserve(usize),
    /// Replace the content.
    Assign(Vec<u8>),
    /// Remove all content.
    Clear,
    /// Release unused capacity.
    ShrinkToFit,
    /// Move the content out and back in.
    TakeAndRestore,
    /// Replace the buffer with a deep copy of itself.
    ReplaceWithCopy,
    /// Swap with a fresh buffer and back.
    SwapTwice,
}

/// Outcome of a successful replay.
#[derive(Debug, Clone, Default)]
pub struct ModelReport {
    /// Final content.
    pub content: Vec<u8>,
    /// Number of steps where capacity changed.
    pub capacity_changes: usize,
    /// Number of operations rejected as out of range.
    pub rejected: usize,
}

/// A divergence between the buffer and the model.
#[derive(Debug, Clone)]
pub struct ModelMismatch {
    /// Index of the failing operation.
    pub step: usize,
    /// The failing operation.
    pub op: BufferOp,
    /// What went wrong.
    pub reason: String,
}

impl fmt::Display for ModelMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({:?}): {}", self.step, self.op, self.reason)
    }
}

impl std::error::Error for ModelMismatch {}

/// Checks the storage invariants of a buffer.
pub fn check_invariants(buffer: &Buffer) -> Result<(), String> {
    if buffer.len() > buffer.capacity() {
        return Err(format!(
            "length {} exceeds capacity {}",
            buffer.len(),
            buffer.capacity()
        ));
    }
    if !buffer.is_allocated() {
        if buffer.len() != 0 {
            return Err(format!("unallocated buffer has length {}", buffer.len()));
        }
        return Ok(());
    }
    let with_nul = buffer.as_bytes_with_nul();
    if with_nul.len() != buffer.len() + 1 || with_nul[buffer.len()] != 0 {
        return Err("terminator missing".to_string());
    }
    Ok(())
}

/// Replays `ops` against a fresh buffer and a `Vec<u8>` model.
pub fn run_ops(ops: &[BufferOp]) -> Result<ModelReport, ModelMismatch> {
    let mut buffer = Buffer::new();
    let mut model: Vec<u8> = Vec::new();
    let mut report = ModelReport::default();

    for (step, op) in ops.iter().enumerate() {
        let mismatch = |reason: String| ModelMismatch {
            step,
            op: op.clone(),
            reason,
        };

        let capacity_before = buffer.capacity();
        let rejected = apply(&mut buffer, &mut model, op).map_err(mismatch)?;
        if rejected {
            report.rejected += 1;
        }
        if buffer.capacity() != capacity_before {
            report.capacity_changes += 1;
        }

        check_invariants(&buffer).map_err(mismatch)?;
        if buffer.as_bytes() != model.as_slice() {
            return Err(mismatch(format!(
                "content {:?} differs from model {:?}",
                buffer, model
            )));
        }
    }

    report.content = model;
    Ok(report)
}

/// Applies one operation to both sides.
///
/// Returns `Ok(true)` if the operation was correctly rejected as out of range.
fn apply(buffer: &mut Buffer, model: &mut Vec<u8>, op: &BufferOp) -> Result<bool, String> {
    let len = model.len();
    match op {
        BufferOp::Push(b) => {
            buffer.push(*b).map_err(unexpected)?;
            model.push(*b);
        }
        BufferOp::Pop => {
            let got = buffer.pop();
            let want = model.pop();
            if got != want {
                return Err(format!("pop returned {got:?}, expected {want:?}"));
            }
        }
        BufferOp::Append(bytes) => {
            buffer.append(bytes).map_err(unexpected)?;
            model.extend_from_slice(bytes);
        }
        BufferOp::Insert(position, b) => {
            let result = buffer.insert(*position, *b);
            if *position > len {
                return expect_rejected(result);
            }
            expect_position(result, *position)?;
            model.insert(*position, *b);
        }
        BufferOp::InsertBytes(position, bytes) => {
            let result = buffer.insert_bytes(*position, bytes);
            if *position > len {
                return expect_rejected(result);
            }
            expect_position(result, *position)?;
            model.splice(*position..*position, bytes.iter().copied());
        }
        BufferOp::Erase(position) => {
            let result = buffer.erase(*position);
            if *position >= len {
                return expect_rejected(result);
            }
            expect_position(result, *position)?;
            model.remove(*position);
        }
        BufferOp::EraseRange(first, last) => {
            let result = buffer.erase_range(*first, *last);
            if first > last || *last > len {
                return expect_rejected(result);
            }
            expect_position(result, *first)?;
            model.drain(*first..*last);
        }
        BufferOp::Resize(new_len) => {
            let capacity = buffer.capacity();
            buffer.resize(*new_len).map_err(unexpected)?;
            model.resize(*new_len, 0);
            if *new_len <= len && buffer.capacity() != capacity {
                return Err("truncating resize changed capacity".to_string());
            }
        }
        BufferOp::Reserve(n) => {
            let capacity = buffer.capacity();
            buffer.reserve(*n).map_err(unexpected)?;
            if buffer.capacity() < (*n).max(capacity) {
                return Err(format!(
                    "reserve({n}) left capacity at {}",
                    buffer.capacity()
                ));
            }
        }
        BufferOp::Assign(bytes) => {
            buffer.assign(bytes).map_err(unexpected)?;
            model.clear();
            model.extend_from_slice(bytes);
        }
        BufferOp::Clear => {
            let capacity = buffer.capacity();
            buffer.clear();
            model.clear();
            if buffer.capacity() != capacity {
                return Err("clear changed capacity".to_string());
            }
        }
        BufferOp::ShrinkToFit => buffer.shrink_to_fit(),
        BufferOp::TakeAndRestore => {
            let moved = buffer.take();
            if buffer.is_allocated() || !buffer.is_empty() {
                return Err("source not empty after take".to_string());
            }
            *buffer = moved;
        }
        BufferOp::ReplaceWithCopy => {
            *buffer = buffer.try_clone().map_err(unexpected)?;
        }
        BufferOp::SwapTwice => {
            let mut other = Buffer::new();
            buffer.swap(&mut other);
            if buffer.is_allocated() {
                return Err("swap with empty left storage behind".to_string());
            }
            buffer.swap(&mut other);
        }
    }
    Ok(false)
}

fn unexpected(err: BufferError) -> String {
    format!("unexpected error: {err}")
}

fn expect_rejected<T: fmt::Debug>(result: Result<T, BufferError>) -> Result<bool, String> {
    match result {
        Err(err) if err.is_precondition() => Ok(true),
        other => Err(format!("expected precondition violation, got {other:?}")),
    }
}

fn expect_position(result: Result<usize, BufferError>, expected: usize) -> Result<(), String> {
    match result {
        Ok(position) if position == expected => Ok(()),
        other => Err(format!("expected Ok({expected}), got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sequence() {
        let ops = vec![
            BufferOp::Append(b"hello".to_vec()),
            BufferOp::Insert(0, b'>'),
            BufferOp::EraseRange(1, 3),
            BufferOp::Push(b'!'),
        ];
        let report = run_ops(&ops).unwrap();
        assert_eq!(report.content, b">llo!");
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn out_of_range_ops_are_counted() {
        let ops = vec![
            BufferOp::Insert(1, b'x'),
            BufferOp::Erase(0),
            BufferOp::EraseRange(0, 1),
            BufferOp::InsertBytes(2, b"ab".to_vec()),
        ];
        let report = run_ops(&ops).unwrap();
        assert!(report.content.is_empty());
        assert_eq!(report.rejected, 4);
    }

    #[test]
    fn ownership_ops_preserve_content() {
        let ops = vec![
            BufferOp::Assign(b"owned".to_vec()),
            BufferOp::TakeAndRestore,
            BufferOp::ReplaceWithCopy,
            BufferOp::SwapTwice,
            BufferOp::ShrinkToFit,
            BufferOp::Resize(7),
            BufferOp::Clear,
        ];
        let report = run_ops(&ops).unwrap();
        assert!(report.content.is_empty());
    }

    #[test]
    fn check_invariants_accepts_valid_buffers() {
        assert!(check_invariants(&Buffer::new()).is_ok());
        assert!(check_invariants(&Buffer::try_from("ok").unwrap()).is_ok());
    }

    #[test]
    fn mismatch_display() {
        let mismatch = ModelMismatch {
            step: 3,
            op: BufferOp::Pop,
            reason: "boom".to_string(),
        };
        assert_eq!(mismatch.to_string(), "step 3 (Pop): boom");
    }
}
