//! Cross-language test vectors for the numeric conversions.
//!
//! The same vectors are checked against the Rust API here and can be
//! exported as JSON for the C ABI tests of other bindings.

use serde::{Deserialize, Serialize};
use strbuf_core::{
    decimal_from_float, decimal_from_signed, decimal_from_unsigned, to_bits, Buffer,
    FloatPrecision, IntWidth,
};

/// A test vector that can be shared across languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Conversion kind, e.g. `"i8"`, `"u64"`, `"f32"`.
    pub kind: String,
    /// Input value in its decimal source form.
    pub input: String,
    /// Expected rendered text.
    pub expected: String,
}

fn vector(id: &str, kind: &str, input: &str, expected: &str) -> TestVector {
    TestVector {
        id: id.into(),
        kind: kind.into(),
        input: input.into(),
        expected: expected.into(),
    }
}

/// Bit-pattern vectors.
pub fn bits_vectors() -> Vec<TestVector> {
    vec![
        vector("bits_u8_5", "u8", "5", "00000101"),
        vector("bits_u8_max", "u8", "255", "11111111"),
        vector("bits_i8_neg1", "i8", "-1", "11111111"),
        vector("bits_i8_min", "i8", "-128", "10000000"),
        vector("bits_u16_256", "u16", "256", "0000000100000000"),
        vector("bits_i16_neg2", "i16", "-2", "1111111111111110"),
        vector(
            "bits_u32_one",
            "u32",
            "1",
            "00000000000000000000000000000001",
        ),
        vector(
            "bits_i32_min",
            "i32",
            "-2147483648",
            "10000000000000000000000000000000",
        ),
        vector("bits_u64_zero", "u64", "0", &"0".repeat(64)),
        vector("bits_i64_neg1", "i64", "-1", &"1".repeat(64)),
    ]
}

/// Decimal rendering vectors.
pub fn decimal_vectors() -> Vec<TestVector> {
    vec![
        vector("dec_i16_neg", "i16", "-32768", "-32768"),
        vector("dec_i16_wrap", "i16", "40000", "-25536"),
        vector("dec_u16_max", "u16", "65535", "65535"),
        vector("dec_i32_zero", "i32", "0", "0"),
        vector("dec_i64_min", "i64", "-9223372036854775808", "-9223372036854775808"),
        vector("dec_u32_wrap", "u32", "4294967296", "0"),
        vector("dec_u64_max", "u64", "18446744073709551615", "18446744073709551615"),
        vector("dec_f32_half", "f32", "0.5", "0.5"),
        vector("dec_f32_tenth", "f32", "0.1", "0.1"),
        vector("dec_f64_whole", "f64", "3", "3"),
        vector("dec_f64_neg", "f64", "-2.25", "-2.25"),
        vector("dec_ext_tenth", "extended", "0.1", "0.1"),
    ]
}

/// Renders a vector's input with the conversion its kind names.
///
/// Returns `None` if the kind is unknown or the input does not parse.
pub fn render(v: &TestVector) -> Option<Vec<u8>> {
    if v.id.starts_with("bits_") {
        return render_bits(&v.kind, &v.input);
    }
    let buffer = match v.kind.as_str() {
        "i16" => decimal_from_signed(IntWidth::W16, v.input.parse().ok()?),
        "i32" => decimal_from_signed(IntWidth::W32, v.input.parse().ok()?),
        "i64" => decimal_from_signed(IntWidth::W64, v.input.parse().ok()?),
        "u16" => decimal_from_unsigned(IntWidth::W16, v.input.parse().ok()?),
        "u32" => decimal_from_unsigned(IntWidth::W32, v.input.parse().ok()?),
        "u64" => decimal_from_unsigned(IntWidth::W64, v.input.parse().ok()?),
        "f32" => decimal_from_float(FloatPrecision::Single, v.input.parse().ok()?),
        "f64" => decimal_from_float(FloatPrecision::Double, v.input.parse().ok()?),
        "extended" => decimal_from_float(FloatPrecision::Extended, v.input.parse().ok()?),
        _ => return None,
    };
    buffer.ok().map(|b| b.as_bytes().to_vec())
}

fn render_bits(kind: &str, input: &str) -> Option<Vec<u8>> {
    let mut out = Buffer::new();
    let result = match kind {
        "i8" => to_bits(&mut out, input.parse::<i8>().ok()?),
        "u8" => to_bits(&mut out, input.parse::<u8>().ok()?),
        "i16" => to_bits(&mut out, input.parse::<i16>().ok()?),
        "u16" => to_bits(&mut out, input.parse::<u16>().ok()?),
        "i32" => to_bits(&mut out, input.parse::<i32>().ok()?),
        "u32" => to_bits(&mut out, input.parse::<u32>().ok()?),
        "i64" => to_bits(&mut out, input.parse::<i64>().ok()?),
        "u64" => to_bits(&mut out, input.parse::<u64>().ok()?),
        _ => return None,
    };
    result.ok().map(|()| out.as_bytes().to_vec())
}

/// Checks every vector, returning the ids of those that fail.
pub fn failing_vectors(vectors: &[TestVector]) -> Vec<String> {
    vectors
        .iter()
        .filter(|v| render(v).as_deref() != Some(v.expected.as_bytes()))
        .map(|v| v.id.clone())
        .collect()
}

/// Exports all test vectors as JSON.
pub fn all_vectors_json() -> String {
    let vectors = AllVectors {
        bits: bits_vectors(),
        decimal: decimal_vectors(),
    };
    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

/// Container for all test vectors.
#[derive(Debug, Serialize, Deserialize)]
pub struct AllVectors {
    /// Bit-pattern vectors.
    pub bits: Vec<TestVector>,
    /// Decimal rendering vectors.
    pub decimal: Vec<TestVector>,
}
