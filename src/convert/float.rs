// ============================================================================
// Float Conversions
// f64 in through its shortest decimal text, f64 out exactly rounded
// ============================================================================

use crate::convert::ArbitraryPrecision;
use crate::numeric::fast_math::{f64_pow_ten, F64_POW10};
use crate::numeric::Decimal64;
use arrayvec::ArrayString;
use bigdecimal::BigDecimal;
use std::fmt::Write;

/// Floats above this saturate to an infinity.
const MAX_REPRESENTABLE_F64: f64 = 9_999_999_999_999_999e255;

/// Floats below this flush to zero.
const MIN_REPRESENTABLE_F64: f64 = 1e-255;

/// Mantissas up to 2^53 convert to f64 without rounding.
const MAX_EXACT_F64_MANTISSA: u64 = 1 << f64::MANTISSA_DIGITS;

/// Longest `{:e}` form of an f64, e.g. `-2.2250738585072014e-308`.
const F64_TEXT_CAPACITY: usize = 32;

impl Decimal64 {
    /// Convert from f64 using the shortest decimal digits that round-trip
    /// to the same float, rounded half-even to 16 significant digits.
    ///
    /// NaN and the infinities map to their `Decimal64` counterparts.
    /// Magnitudes beyond the decimal range saturate to an infinity or
    /// flush to zero.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// assert_eq!(Decimal64::from_f64(0.1).to_string(), "0.1");
    /// assert_eq!(Decimal64::from_f64(0.1 + 0.2).to_string(), "0.3");
    /// ```
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Decimal64::NAN;
        }
        let magnitude = value.abs();
        if magnitude > MAX_REPRESENTABLE_F64 {
            return if value > 0.0 {
                Decimal64::INFINITY
            } else {
                Decimal64::NEG_INFINITY
            };
        }
        if magnitude < MIN_REPRESENTABLE_F64 {
            return Decimal64::ZERO;
        }

        let mut text = ArrayString::<F64_TEXT_CAPACITY>::new();
        if write!(text, "{:e}", value).is_err() {
            return Decimal64::NAN;
        }
        match split_scientific(text.as_bytes()) {
            Some((mantissa, exponent)) => Decimal64::from_parts(mantissa, exponent),
            None => Decimal64::NAN,
        }
    }

    /// Convert to the nearest f64.
    ///
    /// Integers and values whose mantissa and power of ten are both exact
    /// in f64 convert with a single rounding step; the rest go through the
    /// arbitrary-precision collaborator.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// assert_eq!(Decimal64::from_parts(-31415, 4).to_f64(), -3.1415);
    /// assert!(Decimal64::NAN.to_f64().is_nan());
    /// ```
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_f64_with::<BigDecimal>()
    }

    /// [`Decimal64::to_f64`] with a chosen arbitrary-precision fallback.
    pub fn to_f64_with<B: ArbitraryPrecision>(self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if !self.is_finite() {
            return if self.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        let mantissa = self.mantissa();
        let exponent = self.exponent();
        if exponent == 0 {
            return mantissa as f64;
        }

        let power = exponent.unsigned_abs() as usize;
        if mantissa.unsigned_abs() <= MAX_EXACT_F64_MANTISSA && power < F64_POW10.len() {
            let m = mantissa as f64;
            return if exponent > 0 {
                m / f64_pow_ten(power as u32)
            } else {
                m * f64_pow_ten(power as u32)
            };
        }

        tracing::trace!(mantissa, exponent, "converting to f64 with arbitrary precision");
        B::from_decimal_parts(mantissa, exponent).approx_f64()
    }
}

/// Split `[-]d[.ddd]e[-]x` as printed by `{:e}` into `(mantissa, exponent)`
/// with `value == mantissa * 10^-exponent`.
///
/// The shortest round-trip form of an f64 has at most 17 digits, so the
/// mantissa always fits an i64.
fn split_scientific(text: &[u8]) -> Option<(i64, i32)> {
    let (negative, body) = match text.split_first() {
        Some((&b'-', rest)) => (true, rest),
        _ => (false, text),
    };
    let split = body.iter().position(|&b| b == b'e')?;
    let (digits, power) = (&body[..split], &body[split + 1..]);

    let mut mantissa: i64 = 0;
    let mut fraction_digits: i32 = 0;
    let mut seen_point = false;
    for &byte in digits {
        match byte {
            b'0'..=b'9' => {
                mantissa = mantissa.checked_mul(10)?.checked_add(i64::from(byte - b'0'))?;
                if seen_point {
                    fraction_digits += 1;
                }
            },
            b'.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }

    let power: i32 = std::str::from_utf8(power).ok()?.parse().ok()?;
    let mantissa = if negative { -mantissa } else { mantissa };
    Some((mantissa, fraction_digits - power))
}

impl From<Decimal64> for f64 {
    #[inline]
    fn from(value: Decimal64) -> Self {
        value.to_f64()
    }
}
