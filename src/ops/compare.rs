// ============================================================================
// Comparison
// Total order over finite values, the infinities and NaN
// ============================================================================

use crate::numeric::fast_math::{digit_count, pow_ten, same_sign};
use crate::numeric::Decimal64;
use std::cmp::Ordering;

impl Decimal64 {
    /// Numeric comparison.
    ///
    /// The order is total: `NEG_INFINITY < finite < INFINITY < NAN`, and NaN
    /// equals itself. Works on the packed words without any allocation.
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if self.is_finite() && other.is_finite() {
            compare_finite(self, other)
        } else {
            compare_non_finite(self, other)
        }
    }

    /// Numeric equality. Same as `==` on canonical words.
    #[inline]
    pub fn equal(self, other: Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns the minimum of two values. NaN loses to everything.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.compare(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of two values. NaN wins over everything.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.compare(other) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

#[cold]
fn compare_non_finite(a: Decimal64, b: Decimal64) -> Ordering {
    if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        // The infinities carry the widest mantissas, so the words order them.
        a.raw_value().cmp(&b.raw_value())
    }
}

fn compare_finite(a: Decimal64, b: Decimal64) -> Ordering {
    let (a_m, a_e) = (a.mantissa(), a.exponent());
    let (b_m, b_e) = (b.mantissa(), b.exponent());

    if a_m == 0 || b_m == 0 || !same_sign(a_m, b_m) || a_e == b_e {
        return a_m.cmp(&b_m);
    }

    let magnitude = compare_magnitude(a_m, a_e, b_m, b_e);
    if a_m < 0 {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Compare `|a_m| * 10^-a_e` with `|b_m| * 10^-b_e`.
///
/// Both mantissas are canonical (at most 16 digits, nonzero).
pub(crate) fn compare_magnitude(a_m: i64, a_e: i32, b_m: i64, b_e: i32) -> Ordering {
    let (a_m, b_m) = (a_m.abs(), b_m.abs());
    if a_e == b_e {
        return a_m.cmp(&b_m);
    }

    let a_digits = digit_count(a_m) as i32;
    let b_digits = digit_count(b_m) as i32;
    if a_digits == b_digits {
        // Same width: fewer fractional digits means larger.
        return b_e.cmp(&a_e);
    }

    // Power of ten of the leading digit.
    let a_position = a_digits - 1 - a_e;
    let b_position = b_digits - 1 - b_e;
    if a_position != b_position {
        return a_position.cmp(&b_position);
    }

    // Same leading position: widen the shorter one, stays within 16 digits.
    if a_digits < b_digits {
        (a_m * pow_ten((b_digits - a_digits) as u32)).cmp(&b_m)
    } else {
        a_m.cmp(&(b_m * pow_ten((a_digits - b_digits) as u32)))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Decimal64 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal64 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}
