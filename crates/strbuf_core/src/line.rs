//! Line input into buffers.

use crate::buffer::Buffer;
use crate::error::BufferResult;
use std::io::{self, BufRead};

/// Reads one line from `reader` into `buf`, replacing its content.
///
/// The line ends at `\n` (not stored) or at end of input. Returns `false`
/// when end of input was reached before any byte was read; `buf` is then
/// empty.
///
/// Bytes are copied straight from the reader's internal buffer, so no
/// intermediate allocation is made.
///
/// # Errors
///
/// - [`BufferError::Io`](crate::BufferError::Io) if the reader fails.
/// - [`BufferError::AllocationFailure`](crate::BufferError::AllocationFailure)
///   if the line does not fit in memory.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Buffer) -> BufferResult<bool> {
    buf.clear();
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        if let Some(newline) = available.iter().position(|&b| b == b'\n') {
            buf.append(&available[..newline])?;
            reader.consume(newline + 1);
            return Ok(true);
        }

        let consumed = available.len();
        buf.append(available)?;
        reader.consume(consumed);
    }
}

/// Reads one line from standard input into `buf`.
///
/// See [`read_line`] for the exact semantics.
///
/// # Errors
///
/// Same as [`read_line`].
pub fn read_stdin_line(buf: &mut Buffer) -> BufferResult<bool> {
    read_line(&mut io::stdin().lock(), buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    #[test]
    fn reads_successive_lines() {
        let mut input = Cursor::new(b"first\nsecond\n".to_vec());
        let mut buf = Buffer::new();

        assert!(read_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "first");
        assert!(read_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "second");
        assert!(!read_line(&mut input, &mut buf).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn last_line_without_newline() {
        let mut input = Cursor::new(b"only".to_vec());
        let mut buf = Buffer::new();
        assert!(read_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "only");
        assert!(!read_line(&mut input, &mut buf).unwrap());
    }

    #[test]
    fn empty_line_is_a_line() {
        let mut input = Cursor::new(b"\nx".to_vec());
        let mut buf = Buffer::try_from("stale").unwrap();
        assert!(read_line(&mut input, &mut buf).unwrap());
        assert!(buf.is_empty());
        assert_eq!(buf.as_c_str(), c"");
    }

    #[test]
    fn eof_clears_previous_content() {
        let mut input = Cursor::new(Vec::new());
        let mut buf = Buffer::try_from("stale").unwrap();
        assert!(!read_line(&mut input, &mut buf).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn carriage_return_is_kept() {
        let mut input = Cursor::new(b"dos\r\n".to_vec());
        let mut buf = Buffer::new();
        read_line(&mut input, &mut buf).unwrap();
        assert_eq!(buf, "dos\r");
    }

    #[test]
    fn line_spanning_reader_chunks() {
        let text = b"0123456789abcdef\ntail";
        let mut input = BufReader::with_capacity(4, &text[..]);
        let mut buf = Buffer::new();
        assert!(read_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "0123456789abcdef");
        assert!(read_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "tail");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn reader_errors_propagate() {
        let mut input = BufReader::new(FailingReader);
        let mut buf = Buffer::new();
        let err = read_line(&mut input, &mut buf).unwrap_err();
        assert!(matches!(err, crate::BufferError::Io(_)));
    }
}
