// ============================================================================
// Division
// Always through the arbitrary-precision collaborator, 16-digit half-even
// ============================================================================
//
// Division by zero returns NaN for every dividend, 0/0 included. This
// departs from IEEE-754, which gives a signed infinity for x/0.

use crate::convert::{from_arbitrary, ArbitraryPrecision};
use crate::numeric::fast_math::same_sign;
use crate::numeric::{Decimal64, PRECISION};
use bigdecimal::BigDecimal;

impl Decimal64 {
    /// `self / rhs`, rounded half-even to 16 significant digits.
    ///
    /// **Dividing by zero yields NaN**, never an infinity. Infinity divided
    /// by infinity is NaN, a finite value divided by an infinity is zero.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let third = Decimal64::ONE.div(Decimal64::from(3));
    /// assert_eq!(third.to_string(), "0.3333333333333333");
    /// assert!(Decimal64::ONE.div(Decimal64::ZERO).is_nan());
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, rhs: Self) -> Self {
        self.div_with::<BigDecimal>(rhs)
    }

    /// [`Decimal64::div`] with a chosen arbitrary-precision fallback.
    pub fn div_with<B: ArbitraryPrecision>(self, rhs: Self) -> Self {
        if !self.is_finite() || !rhs.is_finite() {
            return div_non_finite(self, rhs);
        }
        if rhs.is_zero() {
            return Decimal64::NAN;
        }
        if self.is_zero() {
            return Decimal64::ZERO;
        }
        if rhs == Decimal64::ONE {
            return self;
        }

        tracing::trace!(
            dividend = self.raw_value(),
            divisor = rhs.raw_value(),
            "dividing with arbitrary precision"
        );
        let dividend = B::from_decimal_parts(self.mantissa(), self.exponent());
        let divisor = B::from_decimal_parts(rhs.mantissa(), rhs.exponent());
        from_arbitrary(&dividend.div_rounded(&divisor, PRECISION))
    }
}

#[cold]
fn div_non_finite(a: Decimal64, b: Decimal64) -> Decimal64 {
    if a.is_nan() || b.is_nan() || b.is_zero() {
        return Decimal64::NAN;
    }
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Decimal64::NAN,
        (false, true) => Decimal64::ZERO,
        _ => {
            if same_sign(a.mantissa(), b.mantissa()) {
                Decimal64::INFINITY
            } else {
                Decimal64::NEG_INFINITY
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::numeric::testing;
    use crate::numeric::Decimal64;
    use proptest::prelude::*;

    fn d(m: i64, e: i32) -> Decimal64 {
        Decimal64::from_parts(m, e)
    }

    #[test]
    fn test_div_known_values() {
        let cases = [
            ((12300000123, 7), (789, 2), (1558935376806084, 13)),
            ((123, 0), (1, 150), (123, -150)),
            ((-1230, 0), (123, 16), (-1, -17)),
            ((1, -28), (19, -12), (5263157894736842, 1)),
            ((5, 11), (19, 27), (2631578947368421, 0)),
            ((-6, 128), (-17, 128), (3529411764705882, 16)),
            ((74743267600, 0), (-974128827, 5), (-7672831922055418, 9)),
        ];
        for ((am, ae), (bm, be), (em, ee)) in cases {
            let (a, b) = (d(am, ae), d(bm, be));
            assert_eq!(a.div(b), d(em, ee), "{} / {}", a.tuple(), b.tuple());
        }
    }

    #[test]
    fn test_div_rounds_half_even() {
        assert_eq!(Decimal64::TWO.div(d(3, 0)), d(6666666666666667, 16));
        assert_eq!(d(1, 0).div(d(8, 0)), d(125, 3));
    }

    #[test]
    fn test_div_by_zero_is_nan() {
        assert!(Decimal64::ONE.div(Decimal64::ZERO).is_nan());
        assert!(Decimal64::ONE.negate().div(Decimal64::ZERO).is_nan());
        assert!(Decimal64::ZERO.div(Decimal64::ZERO).is_nan());
        assert!(Decimal64::INFINITY.div(Decimal64::ZERO).is_nan());
    }

    #[test]
    fn test_div_shortcuts() {
        let x = d(-31415, 4);
        assert_eq!(Decimal64::ZERO.div(x), Decimal64::ZERO);
        assert_eq!(x.div(Decimal64::ONE), x);
        assert_eq!(x.div(x), Decimal64::ONE);
    }

    #[test]
    fn test_div_non_finite() {
        let two = Decimal64::TWO;
        assert!(Decimal64::NAN.div(two).is_nan());
        assert!(two.div(Decimal64::NAN).is_nan());
        assert!(Decimal64::INFINITY.div(Decimal64::NEG_INFINITY).is_nan());
        assert_eq!(two.div(Decimal64::INFINITY), Decimal64::ZERO);
        assert_eq!(Decimal64::INFINITY.div(two.negate()), Decimal64::NEG_INFINITY);
        assert_eq!(Decimal64::NEG_INFINITY.div(two.negate()), Decimal64::INFINITY);
    }

    #[test]
    fn test_div_saturates() {
        assert_eq!(Decimal64::MAX.div(d(1, 1)), Decimal64::INFINITY);
        assert_eq!(d(1, 255).div(d(2, 0)), Decimal64::ZERO);
    }

    proptest! {
        #[test]
        fn prop_div_result_is_canonical(a in testing::any_value(), b in testing::any_value()) {
            prop_assert!(a.div(b).validate().is_ok());
        }

        #[test]
        fn prop_div_undoes_exact_mul(a in testing::small(), b in testing::small()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(a.mul(b).div(b), a);
        }
    }
}
