//! Bit-pattern command.

use super::{parse_value, CommandError, IntKind};
use std::io::Write;
use strbuf_core::{to_bits, Buffer};
use tracing::info;

/// Prints the accumulated bit patterns of `values`.
pub fn run(kind: IntKind, values: &[String], separate: bool) -> Result<(), CommandError> {
    info!("Converting {} {:?} value(s) to bits", values.len(), kind);

    let out = render(kind, values, separate)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Converts every value into one buffer, in call order.
///
/// Each conversion prepends, so the last value ends up leftmost.
pub fn render(kind: IntKind, values: &[String], separate: bool) -> Result<Buffer, CommandError> {
    let mut out = Buffer::new();
    for (i, value) in values.iter().enumerate() {
        if separate && i > 0 {
            out.insert(out.begin(), b' ')?;
        }
        match kind {
            IntKind::I8 => to_bits(&mut out, parse_value::<i8>("i8", value)?)?,
            IntKind::U8 => to_bits(&mut out, parse_value::<u8>("u8", value)?)?,
            IntKind::I16 => to_bits(&mut out, parse_value::<i16>("i16", value)?)?,
            IntKind::U16 => to_bits(&mut out, parse_value::<u16>("u16", value)?)?,
            IntKind::I32 => to_bits(&mut out, parse_value::<i32>("i32", value)?)?,
            IntKind::U32 => to_bits(&mut out, parse_value::<u32>("u32", value)?)?,
            IntKind::I64 => to_bits(&mut out, parse_value::<i64>("i64", value)?)?,
            IntKind::U64 => to_bits(&mut out, parse_value::<u64>("u64", value)?)?,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_value() {
        let out = render(IntKind::U8, &values(&["5"]), false).unwrap();
        assert_eq!(out, "00000101");
    }

    #[test]
    fn later_values_are_leftmost() {
        let out = render(IntKind::U8, &values(&["1", "2"]), false).unwrap();
        assert_eq!(out, "0000001000000001");

        let out = render(IntKind::U8, &values(&["1", "2"]), true).unwrap();
        assert_eq!(out, "00000010 00000001");
    }

    #[test]
    fn negative_signed() {
        let out = render(IntKind::I8, &values(&["-1"]), false).unwrap();
        assert_eq!(out, "11111111");
    }

    #[test]
    fn invalid_value_is_reported() {
        let err = render(IntKind::U8, &values(&["300"]), false).unwrap_err();
        assert!(matches!(err, CommandError::InvalidValue { kind: "u8", .. }));
    }
}
