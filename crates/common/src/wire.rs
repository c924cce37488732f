//! Canonical JSON encoding for bytes that cross the gateway boundary.
//!
//! The partner decrypts and compares against its own canonical form, so two
//! details differ from `serde_json` defaults:
//!
//! - Whole-number amounts are written without a fractional part (`1200`, not `1200.0`).
//! - `<`, `>`, `&`, U+2028 and U+2029 inside strings are written as `\uXXXX` escapes.

use std::io;

use serde::{Serialize, Serializer};
use serde_json::ser::{CompactFormatter, Formatter};

/// Largest magnitude written as an integer; beyond this `f64` loses unit precision anyway.
const MAX_INTEGRAL_AMOUNT: f64 = 1e18;

/// `serialize_with` hook for monetary `f64` fields.
pub fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_INTEGRAL_AMOUNT {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

/// Compact formatter that additionally escapes HTML-significant characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escape = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escape.as_bytes())?;
            start = i + ch.len_utf8();
        }
        CompactFormatter.write_string_fragment(writer, &fragment[start..])
    }
}

/// Serialise `value` to compact JSON with [`HtmlSafeFormatter`].
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if `value` cannot be serialised.
pub fn to_vec<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, HtmlSafeFormatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Amounts {
        #[serde(serialize_with = "serialize_amount")]
        whole: f64,
        #[serde(serialize_with = "serialize_amount")]
        fractional: f64,
        #[serde(serialize_with = "serialize_amount")]
        negative: f64,
        #[serde(serialize_with = "serialize_amount")]
        zero: f64,
    }

    #[test]
    fn whole_amounts_have_no_fraction() {
        let a = Amounts {
            whole: 1200.0,
            fractional: 75.5,
            negative: -40.0,
            zero: 0.0,
        };
        let s = String::from_utf8(to_vec(&a).unwrap()).unwrap();
        assert_eq!(s, r#"{"whole":1200,"fractional":75.5,"negative":-40,"zero":0}"#);
    }

    #[test]
    fn html_characters_are_escaped() {
        let s = String::from_utf8(to_vec("a<b&c>d").unwrap()).unwrap();
        assert_eq!(s, r#""a\u003cb\u0026c\u003ed""#);
    }

    #[test]
    fn line_separators_are_escaped() {
        let s = String::from_utf8(to_vec("x\u{2028}y\u{2029}").unwrap()).unwrap();
        assert_eq!(s, r#""x\u2028y\u2029""#);
    }

    #[test]
    fn standard_escapes_still_apply() {
        let s = String::from_utf8(to_vec("say \"hi\"\n<ok>").unwrap()).unwrap();
        assert_eq!(s, r#""say \"hi\"\n\u003cok\u003e""#);
    }

    #[test]
    fn escaped_output_parses_back() {
        let bytes = to_vec("Cheque & DD <branch>").unwrap();
        let back: String = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, "Cheque & DD <branch>");
    }
}
