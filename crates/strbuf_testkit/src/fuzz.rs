//! Fuzz testing harnesses for strbuf.
//!
//! These targets take raw bytes so they can be driven by cargo-fuzz or any
//! other byte-oriented fuzzer. Each one panics only when the buffer breaks
//! an invariant.

use crate::model::{run_ops, BufferOp};
use std::io::Cursor;
use strbuf_core::{read_line, to_bits, Buffer, ToDecimal};

/// Decodes a byte stream into buffer operations.
///
/// Each operation starts with a tag byte. Positions take one byte, byte
/// runs take a length byte followed by that many bytes (truncated at the
/// end of input).
pub fn decode_ops(data: &[u8]) -> Vec<BufferOp> {
    let mut ops = Vec::new();
    let mut offset = 0;

    let next = |offset: &mut usize| -> usize {
        let value = data.get(*offset).copied().unwrap_or(0);
        *offset += 1;
        usize::from(value)
    };

    while offset < data.len() {
        let tag = data[offset];
        offset += 1;

        let op = match tag % 15 {
            0 => BufferOp::Push(next(&mut offset) as u8),
            1 => BufferOp::Pop,
            2 => BufferOp::Append(take_run(data, &mut offset)),
            3 => {
                let position = next(&mut offset);
                BufferOp::Insert(position, next(&mut offset) as u8)
            }
            4 => {
                let position = next(&mut offset);
                BufferOp::InsertBytes(position, take_run(data, &mut offset))
            }
            5 => BufferOp::Erase(next(&mut offset)),
            6 => {
                let first = next(&mut offset);
                BufferOp::EraseRange(first, next(&mut offset))
            }
            7 => BufferOp::Resize(next(&mut offset)),
            8 => BufferOp::Reserve(next(&mut offset) * 4),
            9 => BufferOp::Assign(take_run(data, &mut offset)),
            10 => BufferOp::Clear,
            11 => BufferOp::ShrinkToFit,
            12 => BufferOp::TakeAndRestore,
            13 => BufferOp::ReplaceWithCopy,
            _ => BufferOp::SwapTwice,
        };
        ops.push(op);
    }

    ops
}

fn take_run(data: &[u8], offset: &mut usize) -> Vec<u8> {
    let len = usize::from(data.get(*offset).copied().unwrap_or(0));
    *offset += 1;
    let start = (*offset).min(data.len());
    let end = (start + len).min(data.len());
    *offset = start + len;
    data[start..end].to_vec()
}

/// Fuzz target for buffer operation sequences.
///
/// Decodes `data` into operations and replays them against the reference
/// model.
pub fn fuzz_buffer_operations(data: &[u8]) {
    let ops = decode_ops(data);
    if let Err(mismatch) = run_ops(&ops) {
        panic!("buffer diverged from model: {mismatch}");
    }
}

/// Fuzz target for line input.
///
/// Reads every line out of `data` and checks that re-joining them with
/// `\n` reproduces the input (minus a single trailing newline).
pub fn fuzz_line_input(data: &[u8]) {
    let mut reader = Cursor::new(data);
    let mut line = Buffer::new();
    let mut joined: Vec<u8> = Vec::new();
    let mut first = true;

    while let Ok(true) = read_line(&mut reader, &mut line) {
        assert!(!line.as_bytes().contains(&b'\n'), "line kept its newline");
        if !first {
            joined.push(b'\n');
        }
        joined.extend_from_slice(line.as_bytes());
        first = false;
    }

    let expected = data.strip_suffix(b"\n").unwrap_or(data);
    assert_eq!(joined, expected, "lines do not reassemble the input");
}

/// Fuzz target for the numeric conversions.
///
/// Interprets the first eight bytes as a `u64` and checks the bit pattern
/// and decimal renderings of it and its narrower truncations.
pub fn fuzz_conversions(data: &[u8]) {
    let mut raw = [0u8; 8];
    let n = data.len().min(8);
    raw[..n].copy_from_slice(&data[..n]);
    let value = u64::from_le_bytes(raw);

    let mut bits = Buffer::new();
    if to_bits(&mut bits, value).is_ok() {
        assert_eq!(bits, format!("{value:064b}").as_str(), "bit pattern mismatch");
    }
    bits.clear();
    if to_bits(&mut bits, value as i8).is_ok() {
        assert_eq!(bits, format!("{:08b}", value as i8).as_str());
    }

    if let Ok(text) = (value as i64).to_decimal() {
        assert_eq!(text, (value as i64).to_string().as_str());
    }
    if let Ok(text) = f64::from_bits(value).to_decimal() {
        assert_eq!(text, f64::from_bits(value).to_string().as_str());
    }
}
