// ============================================================================
// Parsing
// ASCII text to Decimal64 without allocation on the common path
// ============================================================================
//
// Grammar (after trimming ASCII whitespace):
//
//   NaN | [+-]Infinity | [+-] digits [. digits] [(e|E) [+-] digits]
//
// At least one mantissa digit is required and either side of the point may
// be empty. Plain numbers with up to 16 significant digits are scanned
// straight into an i64. Scientific notation and longer digit strings are
// validated here and then handed to the arbitrary-precision collaborator.

use crate::convert::{from_arbitrary, ArbitraryPrecision};
use crate::numeric::fast_math::pow_ten;
use crate::numeric::{Decimal64, NumericError, NumericResult, PRECISION};
use bigdecimal::BigDecimal;
use std::str::FromStr;

const NAN_LITERAL: &[u8] = b"NaN";
const INFINITY_LITERAL: &[u8] = b"Infinity";

impl Decimal64 {
    /// Parse ASCII bytes, trimming surrounding whitespace.
    ///
    /// Accepts `NaN`, `Infinity` with an optional sign, plain decimals such
    /// as `-12.50` or `.5`, and scientific notation such as `1.5E-3`.
    /// Results are normalized, so values beyond 16 digits round half-even
    /// and huge or tiny exponents saturate.
    ///
    /// # Errors
    /// Returns `InvalidFormat` carrying the trimmed input.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let x = Decimal64::parse_ascii(b"  -0.001 ").unwrap();
    /// assert_eq!((x.mantissa(), x.exponent()), (-1, 3));
    /// ```
    #[inline]
    pub fn parse_ascii(input: &[u8]) -> NumericResult<Self> {
        Self::parse_ascii_with::<BigDecimal>(input)
    }

    /// [`Decimal64::parse_ascii`] with a chosen arbitrary-precision fallback.
    pub fn parse_ascii_with<B: ArbitraryPrecision>(input: &[u8]) -> NumericResult<Self> {
        let text = input.trim_ascii();
        parse_trimmed::<B>(text).ok_or_else(|| invalid(text))
    }

    /// Parse `len` bytes of `text` starting at byte `offset`.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the range does not fit in `text`, otherwise
    /// the errors of [`Decimal64::parse_ascii`].
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// assert!(Decimal64::from_str_range("abcNaN", 3, 3).unwrap().is_nan());
    /// assert_eq!(Decimal64::from_str_range("1231", 3, 1).unwrap(), Decimal64::ONE);
    /// ```
    pub fn from_str_range(text: &str, offset: usize, len: usize) -> NumericResult<Self> {
        let bytes = text.as_bytes();
        let range = offset
            .checked_add(len)
            .and_then(|end| bytes.get(offset..end))
            .ok_or(NumericError::OutOfBounds {
                offset,
                len,
                size: bytes.len(),
            })?;
        Self::parse_ascii(range)
    }
}

impl FromStr for Decimal64 {
    type Err = NumericError;

    fn from_str(s: &str) -> NumericResult<Self> {
        Self::parse_ascii(s.as_bytes())
    }
}

impl TryFrom<&str> for Decimal64 {
    type Error = NumericError;

    #[inline]
    fn try_from(s: &str) -> NumericResult<Self> {
        Self::parse_ascii(s.as_bytes())
    }
}

fn invalid(text: &[u8]) -> NumericError {
    let text = String::from_utf8_lossy(text).into_owned();
    tracing::debug!(input = %text, "rejected decimal text");
    NumericError::InvalidFormat(text)
}

fn parse_trimmed<B: ArbitraryPrecision>(text: &[u8]) -> Option<Decimal64> {
    if text == NAN_LITERAL {
        return Some(Decimal64::NAN);
    }

    let (negative, body) = match text.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        Some(_) => (false, text),
        None => return None,
    };

    if body == INFINITY_LITERAL {
        return Some(if negative {
            Decimal64::NEG_INFINITY
        } else {
            Decimal64::INFINITY
        });
    }

    let scan = scan_plain(body)?;
    let value = if scan.needs_fallback {
        parse_fallback::<B>(body)?
    } else {
        let exponent = scan.fraction_digits.saturating_sub(scan.pending_zeros);
        Decimal64::from_parts(scan.mantissa, exponent)
    };

    Some(if negative { value.negate() } else { value })
}

/// Unsigned digits of a plain decimal, scanned left to right.
#[derive(Debug, Default)]
struct Scan {
    mantissa: i64,
    significant_digits: u32,
    /// Zeros seen after the first nonzero digit and not yet folded in.
    pending_zeros: i32,
    fraction_digits: i32,
    needs_fallback: bool,
}

fn scan_plain(body: &[u8]) -> Option<Scan> {
    let mut scan = Scan::default();
    let mut seen_digit = false;
    let mut seen_point = false;

    for (i, &byte) in body.iter().enumerate() {
        match byte {
            b'0'..=b'9' => {
                seen_digit = true;
                if seen_point {
                    scan.fraction_digits = scan.fraction_digits.saturating_add(1);
                }
                let digit = i64::from(byte - b'0');
                if digit == 0 {
                    if scan.significant_digits > 0 {
                        scan.pending_zeros = scan.pending_zeros.saturating_add(1);
                    }
                    continue;
                }
                let shift = scan.pending_zeros.saturating_add(1);
                scan.significant_digits = scan.significant_digits.saturating_add(shift as u32);
                scan.pending_zeros = 0;
                if scan.significant_digits <= PRECISION {
                    scan.mantissa = scan.mantissa * pow_ten(shift as u32) + digit;
                } else {
                    scan.needs_fallback = true;
                }
            },
            b'.' if !seen_point => seen_point = true,
            b'e' | b'E' if seen_digit => {
                if !valid_exponent(&body[i + 1..]) {
                    return None;
                }
                scan.needs_fallback = true;
                return Some(scan);
            },
            _ => return None,
        }
    }

    seen_digit.then_some(scan)
}

/// `[+-] digits`, nothing else.
fn valid_exponent(text: &[u8]) -> bool {
    let digits = match text.split_first() {
        Some((&(b'+' | b'-'), rest)) => rest,
        _ => text,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

#[cold]
fn parse_fallback<B: ArbitraryPrecision>(body: &[u8]) -> Option<Decimal64> {
    let text = std::str::from_utf8(body).ok()?;
    tracing::trace!(input = text, "parsing with arbitrary precision");
    B::parse_decimal(text).map(|value| from_arbitrary(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: i64, e: i32) -> Decimal64 {
        Decimal64::from_parts(m, e)
    }

    fn parse(text: &str) -> Decimal64 {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_values() {
        assert_eq!(parse("-10."), d(-10, 0));
        assert_eq!(parse("   -10.  "), d(-10, 0));
        assert_eq!(parse("-0.001"), d(-1, 3));
        assert_eq!(parse("-0.000000000000000001"), d(-1, 18));
        assert_eq!(parse("3.14159"), d(314159, 5));
        assert_eq!(parse("+42"), d(42, 0));
        assert_eq!(parse("1.50"), d(15, 1));
        assert_eq!(parse("000123.4500"), d(12345, 2));
        assert_eq!(parse(".5"), d(5, 1));
        assert_eq!(parse("5."), d(5, 0));
    }

    #[test]
    fn test_parse_zero_forms() {
        for text in ["0", "-0", "+0.000", "00.0", "0."] {
            assert_eq!(parse(text), Decimal64::ZERO, "{}", text);
        }
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse("-1E+1"), d(-10, 0));
        assert_eq!(parse("1.5e-3"), d(15, 4));
        assert_eq!(parse("2E3"), d(2, -3));
        assert_eq!(parse("1e300"), Decimal64::INFINITY);
        assert_eq!(parse("-1e300"), Decimal64::NEG_INFINITY);
        assert_eq!(parse("1e-300"), Decimal64::ZERO);
    }

    #[test]
    fn test_parse_long_digit_strings_round_half_even() {
        assert_eq!(parse("1.23456789012345678"), d(1234567890123457, 15));
        assert_eq!(parse("12345678901234565"), d(1234567890123456, -1));
        assert_eq!(parse("-12345678901234575"), d(-1234567890123458, -1));
        assert_eq!(parse("0.00000000000000000000123"), d(123, 23));
    }

    #[test]
    fn test_parse_saturates_without_fallback() {
        let mut huge = String::from("1");
        huge.push_str(&"0".repeat(300));
        assert_eq!(parse(&huge), Decimal64::INFINITY);

        let mut tiny = String::from("0.");
        tiny.push_str(&"0".repeat(300));
        tiny.push('1');
        assert_eq!(parse(&tiny), Decimal64::ZERO);
    }

    #[test]
    fn test_parse_special_literals() {
        assert!(parse("NaN").is_nan());
        assert!(parse("  NaN ").is_nan());
        assert_eq!(parse("Infinity"), Decimal64::INFINITY);
        assert_eq!(parse("+Infinity"), Decimal64::INFINITY);
        assert_eq!(parse("-Infinity"), Decimal64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_invalid_input() {
        for text in [
            "-10.zyx", "-1E+1.", "   ", " + ", "- ", "", ".", "-.", "1.2.3", "1e", "1e+", "e5",
            "nan", "-NaN", "infinity", "Inf", "1,000", "0x10", "1 2",
        ] {
            assert!(
                matches!(text.parse::<Decimal64>(), Err(NumericError::InvalidFormat(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_invalid_input_carries_trimmed_text() {
        let err = "  -10.zyx ".parse::<Decimal64>().unwrap_err();
        assert_eq!(err, NumericError::InvalidFormat("-10.zyx".to_string()));
    }

    #[test]
    fn test_from_str_range() {
        assert!(Decimal64::from_str_range("abcNaN", 3, 3).unwrap().is_nan());
        assert_eq!(Decimal64::from_str_range("1231", 3, 1).unwrap(), Decimal64::ONE);
        assert_eq!(Decimal64::from_str_range("x=2.5;", 2, 3).unwrap(), d(25, 1));
        assert_eq!(
            Decimal64::from_str_range("12", 1, 5),
            Err(NumericError::OutOfBounds {
                offset: 1,
                len: 5,
                size: 2
            })
        );
        assert!(Decimal64::from_str_range("12", usize::MAX, 2).is_err());
    }

    #[test]
    fn test_parse_ascii_bytes() {
        assert_eq!(Decimal64::parse_ascii(b"\t7.25\n").unwrap(), d(725, 2));
        assert!(Decimal64::parse_ascii(&[0xff, b'1']).is_err());
        assert_eq!(Decimal64::try_from("9").unwrap(), d(9, 0));
    }
}
