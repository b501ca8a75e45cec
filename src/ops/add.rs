// ============================================================================
// Addition and Subtraction
// Exactly rounded sums on i64 mantissas, no arbitrary-precision fallback
// ============================================================================

use super::compare::compare_magnitude;
use crate::numeric::fast_math::{digit_count, pow_ten, same_sign};
use crate::numeric::{Decimal64, PRECISION};
use std::cmp::Ordering;

/// Operands whose leading digits are this far apart cannot interact: the
/// smaller one sits below half a unit of the larger one's last kept digit.
const MAX_ALIGN_DISTANCE: i32 = PRECISION as i32 + 2;

impl Decimal64 {
    /// `self + rhs`, rounded half-even to 16 significant digits.
    ///
    /// NaN in, NaN out. Opposite infinities give NaN, otherwise an infinite
    /// operand wins. Finite sums that overflow saturate to an infinity.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let a = Decimal64::from_parts(314159, 5);
    /// let b = Decimal64::from_parts(150, 0);
    /// assert_eq!(a.add(b).to_string(), "153.14159");
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        if self.is_finite() && rhs.is_finite() {
            add_finite(self, rhs)
        } else {
            add_non_finite(self, rhs)
        }
    }

    /// `self - rhs`, computed as `self + (-rhs)`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs.negate())
    }
}

#[cold]
fn add_non_finite(a: Decimal64, b: Decimal64) -> Decimal64 {
    if a.is_nan() || b.is_nan() {
        return Decimal64::NAN;
    }
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) if a == b => a,
        (true, true) => Decimal64::NAN,
        (true, false) => a,
        _ => b,
    }
}

fn add_finite(a: Decimal64, b: Decimal64) -> Decimal64 {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let (a_m, a_e) = (a.mantissa(), a.exponent());
    let (b_m, b_e) = (b.mantissa(), b.exponent());

    if a_e == b_e {
        // At most 17 digits, normalization rounds the overflow digit.
        return Decimal64::from_parts(a_m + b_m, a_e);
    }

    match compare_magnitude(a_m, a_e, b_m, b_e) {
        Ordering::Less => add_aligned(b_m, b_e, a_m, a_e),
        _ => add_aligned(a_m, a_e, b_m, b_e),
    }
}

/// Add `small` into `large` where `|large| >= |small|` and exponents differ.
///
/// Both operands are nonzero and canonical. The smaller operand is cut to the
/// digits that can influence a 16-digit result plus two guard digits; a
/// nonzero cut-off remainder acts as a sticky digit. Once cut, the aligned
/// sum always has 17 to 19 digits, all within i64.
fn add_aligned(mut l_m: i64, mut l_e: i32, mut s_m: i64, mut s_e: i32) -> Decimal64 {
    let l_digits = digit_count(l_m) as i32;
    let s_digits = digit_count(s_m) as i32;

    // Exponent of each leading digit, negated: l_start <= s_start.
    let l_start = l_e - (l_digits - 1);
    let s_start = s_e - (s_digits - 1);
    let distance = (l_start - s_start).abs();
    if distance >= MAX_ALIGN_DISTANCE {
        return Decimal64::from_parts(l_m, l_e);
    }

    let keep = MAX_ALIGN_DISTANCE - distance;
    let drop = s_digits - keep;
    let mut s_remainder = 0;
    if drop > 0 {
        let divisor = pow_ten(drop as u32);
        s_remainder = (s_m % divisor).abs();
        s_m /= divisor;
        s_e -= drop;
        // Against an opposite sign the discarded tail must pull the result
        // below the exact truncation, so bump the cut operand away from zero.
        if !same_sign(l_m, s_m) && s_remainder > 0 {
            s_m += s_m.signum();
        }
    }

    let exp_diff = l_e - s_e;
    if exp_diff > 0 {
        s_m *= pow_ten(exp_diff as u32);
    } else {
        l_m *= pow_ten((-exp_diff) as u32);
        l_e -= exp_diff;
    }

    l_m += s_m;

    if s_remainder > 0 {
        // The exact sum lies strictly between l_m and the next unit away from
        // zero, so a remainder of exactly one half already rounds away.
        let digits = digit_count(l_m);
        if digits > PRECISION {
            let drop = digits - PRECISION;
            let divisor = pow_ten(drop);
            let rounded = l_m / divisor;
            l_m = if (l_m % divisor).abs() >= divisor / 2 {
                rounded + l_m.signum()
            } else {
                rounded
            };
            l_e -= drop as i32;
        }
    }

    Decimal64::from_parts(l_m, l_e)
}
