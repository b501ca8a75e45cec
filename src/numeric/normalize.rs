// ============================================================================
// Normalization
// The single path every constructed Decimal64 word goes through
// ============================================================================
//
// Output guarantee: either a special word (signed infinity), or
// mantissa == 0 with exponent == 0, or a mantissa of at most 16 digits with
// no trailing zero and an exponent in [-255, 255].

use super::fast_math::{digit_count, shift_right_half_even};
use super::layout::{pack, MAX_RAW_MANTISSA};
use super::{MAX_EXPONENT, MAX_MANTISSA, MIN_EXPONENT, PRECISION, SPECIAL_EXPONENT};

/// Stripping at most 15 zeros from a 16-digit mantissa lowers the exponent
/// by at most 15, so exponents from here up stay in range.
const FAST_MIN_EXPONENT: i32 = MIN_EXPONENT + (PRECISION as i32 - 1);

/// Normalize `mantissa * 10^-exponent` into a packed word.
#[inline]
pub(crate) fn normalize(mantissa: i64, exponent: i32) -> i64 {
    if mantissa == 0 {
        return 0;
    }
    if (-MAX_MANTISSA..=MAX_MANTISSA).contains(&mantissa)
        && (FAST_MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent)
    {
        let (m, e) = strip_trailing_zeros(mantissa, exponent);
        return pack(m, e);
    }
    normalize_slow(mantissa, exponent)
}

#[cold]
fn normalize_slow(mut mantissa: i64, mut exponent: i32) -> i64 {
    if exponent < MIN_EXPONENT {
        tracing::trace!(mantissa, exponent, "decimal overflow, saturating to infinity");
        return signed_infinity(mantissa);
    }

    let digits = digit_count(mantissa);
    if digits > PRECISION {
        let drop = digits - PRECISION;
        mantissa = shift_right_half_even(mantissa, drop);
        exponent -= drop as i32;
    }
    (mantissa, exponent) = strip_trailing_zeros(mantissa, exponent);

    if exponent < MIN_EXPONENT {
        tracing::trace!(mantissa, exponent, "decimal overflow after rounding, saturating to infinity");
        return signed_infinity(mantissa);
    }

    if exponent > MAX_EXPONENT {
        let drop = (exponent - MAX_EXPONENT) as u32;
        if drop >= digit_count(mantissa) {
            // Every digit is below the smallest representable unit.
            tracing::trace!(mantissa, exponent, "decimal underflow, flushing to zero");
            return 0;
        }
        mantissa = shift_right_half_even(mantissa, drop);
        exponent = MAX_EXPONENT;
        if mantissa == 0 {
            return 0;
        }
        (mantissa, exponent) = strip_trailing_zeros(mantissa, exponent);
    }

    pack(mantissa, exponent)
}

#[inline]
fn signed_infinity(mantissa: i64) -> i64 {
    if mantissa < 0 {
        pack(-MAX_RAW_MANTISSA, SPECIAL_EXPONENT)
    } else {
        pack(MAX_RAW_MANTISSA, SPECIAL_EXPONENT)
    }
}

/// Remove trailing decimal zeros, lowering the exponent for each one.
#[inline]
fn strip_trailing_zeros(mut mantissa: i64, mut exponent: i32) -> (i64, i32) {
    if mantissa == 0 {
        return (0, 0);
    }
    while mantissa % 10 == 0 {
        mantissa /= 10;
        exponent -= 1;
    }
    (mantissa, exponent)
}
