//! Decimal rendering command.

use super::{parse_value, CommandError, FloatKind, IntKind};
use std::io::Write;
use strbuf_core::{
    decimal_from_float, decimal_from_signed, decimal_from_unsigned, Buffer, FloatPrecision,
    IntWidth, ToDecimal,
};
use tracing::info;

/// Parses `value` and prints its decimal rendering.
pub fn run(
    kind: Option<IntKind>,
    float: Option<FloatKind>,
    value: &str,
) -> Result<(), CommandError> {
    info!("Rendering {:?} as decimal", value);

    let out = render(kind, float, value)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Renders `value` as the requested type.
///
/// With neither `kind` nor `float` the value is rendered as an `i64`.
pub fn render(
    kind: Option<IntKind>,
    float: Option<FloatKind>,
    value: &str,
) -> Result<Buffer, CommandError> {
    if let Some(float) = float {
        let parsed: f64 = parse_value("float", value)?;
        let precision = match float {
            FloatKind::F32 => FloatPrecision::Single,
            FloatKind::F64 => FloatPrecision::Double,
            FloatKind::Extended => FloatPrecision::Extended,
        };
        return Ok(decimal_from_float(precision, parsed)?);
    }

    let out = match kind.unwrap_or(IntKind::I64) {
        IntKind::I8 => parse_value::<i8>("i8", value)?.to_decimal()?,
        IntKind::U8 => parse_value::<u8>("u8", value)?.to_decimal()?,
        IntKind::I16 => {
            decimal_from_signed(IntWidth::W16, parse_value::<i16>("i16", value)?.into())?
        }
        IntKind::U16 => {
            decimal_from_unsigned(IntWidth::W16, parse_value::<u16>("u16", value)?.into())?
        }
        IntKind::I32 => {
            decimal_from_signed(IntWidth::W32, parse_value::<i32>("i32", value)?.into())?
        }
        IntKind::U32 => {
            decimal_from_unsigned(IntWidth::W32, parse_value::<u32>("u32", value)?.into())?
        }
        IntKind::I64 => decimal_from_signed(IntWidth::W64, parse_value("i64", value)?)?,
        IntKind::U64 => decimal_from_unsigned(IntWidth::W64, parse_value("u64", value)?)?,
    };
    Ok(out)
}
