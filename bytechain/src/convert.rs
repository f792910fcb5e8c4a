//! Parsing primitives over raw byte ranges.
//!
//! Every parser works directly on the bytes and never panics: a malformed
//! input yields `None` and the caller substitutes its own default. This is
//! the soft half of the error contract; range errors on the chain itself are
//! the hard half. The scalar parsers allocate nothing; only the
//! arbitrary-precision and UTF-16 expansions return owned buffers.

use num_bigint::BigInt;

/// The narrowest numeric value a byte run fits into.
///
/// An integer with absolute value at most `i32::MAX` is an `Int`, any other
/// integer is a `Long`, and a decimal point or exponent forces a `Double`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Long(i64),
    Double(f64),
}

fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

macro_rules! signed_parser {
    ($name:ident, $int:ty) => {
        /// Parses an optionally signed integer in the given radix.
        ///
        /// Accepts a leading `+` or `-`, then digits `0-9` and letters of
        /// either case for radices above ten. Returns `None` for an empty
        /// input, a radix outside `2..=36`, a stray byte, or overflow.
        #[must_use]
        pub fn $name(v: &[u8], radix: u32) -> Option<$int> {
            if !(2..=36).contains(&radix) || v.is_empty() {
                return None;
            }
            let digits = if v[0] == b'+' || v[0] == b'-' {
                &v[1..]
            } else {
                v
            };
            if digits.is_empty() {
                return None;
            }
            // Accumulate on the negative side so that the minimum value
            // survives without overflow.
            let mut acc: $int = 0;
            for &b in digits {
                let d = digit_value(b)?;
                if d >= radix {
                    return None;
                }
                acc = acc.checked_mul(radix as $int)?.checked_sub(d as $int)?;
            }
            if v[0] == b'-' {
                Some(acc)
            } else {
                acc.checked_neg()
            }
        }
    };
}

signed_parser!(parse_int, i32);
signed_parser!(parse_long, i64);

/// Parses the standard decimal real syntax, exponents included.
#[must_use]
pub fn parse_float(v: &[u8]) -> Option<f32> {
    core::str::from_utf8(v).ok()?.parse().ok()
}

/// Parses the standard decimal real syntax, exponents included.
#[must_use]
pub fn parse_double(v: &[u8]) -> Option<f64> {
    core::str::from_utf8(v).ok()?.parse().ok()
}

/// Parses `true`/`false` in any case, or a single `0`/`1` digit.
#[must_use]
pub fn parse_bool(v: &[u8]) -> Option<bool> {
    match v {
        [b'0'] => Some(false),
        [b'1'] => Some(true),
        _ if v.eq_ignore_ascii_case(b"true") => Some(true),
        _ if v.eq_ignore_ascii_case(b"false") => Some(false),
        _ => None,
    }
}

/// Parses the narrowest of `i32`, `i64` and `f64` that fits.
#[must_use]
pub fn parse_number(v: &[u8]) -> Option<Number> {
    if v.is_empty() {
        return None;
    }
    if v.iter().any(|&b| b == b'.' || b == b'e' || b == b'E') {
        return parse_double(v).map(Number::Double);
    }
    let num = parse_long(v, 10)?;
    if num.unsigned_abs() <= i32::MAX as u64 {
        Some(Number::Int(num as i32))
    } else {
        Some(Number::Long(num))
    }
}

/// Decodes the whole byte range as exactly one UTF-8 code point.
#[must_use]
pub fn parse_char(v: &[u8]) -> Option<char> {
    let text = core::str::from_utf8(v).ok()?;
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c)
}

/// Parses a decimal big integer, taking the `i64` fast path when it fits.
#[must_use]
pub fn parse_big_integer(v: &[u8]) -> Option<BigInt> {
    if v.is_empty() {
        return None;
    }
    match parse_long(v, 10) {
        Some(num) => Some(BigInt::from(num)),
        None => BigInt::parse_bytes(v, 10),
    }
}

/// Expands a UTF-8 byte range into UTF-16 code units.
///
/// Malformed sequences become the replacement character, mirroring the
/// lenient read contract of the chain.
#[must_use]
pub fn utf16_units(v: &[u8]) -> Vec<u16> {
    String::from_utf8_lossy(v).encode_utf16().collect()
}
