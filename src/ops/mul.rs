// ============================================================================
// Multiplication
// i64 product on the fast path, arbitrary precision when it overflows
// ============================================================================

use crate::convert::{from_arbitrary, ArbitraryPrecision};
use crate::numeric::fast_math::same_sign;
use crate::numeric::Decimal64;
use bigdecimal::BigDecimal;

impl Decimal64 {
    /// `self * rhs`, rounded half-even to 16 significant digits.
    ///
    /// Zero times an infinity is NaN. Products whose exponents run past the
    /// representable range saturate to an infinity or flush to zero.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: Self) -> Self {
        self.mul_with::<BigDecimal>(rhs)
    }

    /// [`Decimal64::mul`] with a chosen arbitrary-precision fallback.
    pub fn mul_with<B: ArbitraryPrecision>(self, rhs: Self) -> Self {
        if !self.is_finite() || !rhs.is_finite() {
            return mul_non_finite(self, rhs);
        }
        if self.is_zero() || rhs.is_zero() {
            return Decimal64::ZERO;
        }

        let (a_m, a_e) = (self.mantissa(), self.exponent());
        let (b_m, b_e) = (rhs.mantissa(), rhs.exponent());

        match a_m.checked_mul(b_m) {
            Some(product) => Decimal64::from_parts(product, a_e + b_e),
            None => mul_slow::<B>(a_m, a_e, b_m, b_e),
        }
    }
}

#[cold]
fn mul_slow<B: ArbitraryPrecision>(a_m: i64, a_e: i32, b_m: i64, b_e: i32) -> Decimal64 {
    tracing::trace!(a_m, a_e, b_m, b_e, "mantissa product overflows i64, using arbitrary precision");
    let product = B::from_decimal_parts(a_m, a_e).mul_exact(&B::from_decimal_parts(b_m, b_e));
    from_arbitrary(&product)
}

#[cold]
fn mul_non_finite(a: Decimal64, b: Decimal64) -> Decimal64 {
    // NaN has a zero mantissa too, so this also covers NaN operands.
    if a.mantissa() == 0 || b.mantissa() == 0 {
        return Decimal64::NAN;
    }
    if same_sign(a.mantissa(), b.mantissa()) {
        Decimal64::INFINITY
    } else {
        Decimal64::NEG_INFINITY
    }
}
