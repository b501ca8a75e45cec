// ============================================================================
// Rounding
// Half-even rounding to a fixed number of fractional digits
// ============================================================================

use crate::convert::{from_arbitrary, ArbitraryPrecision};
use crate::numeric::Decimal64;
use bigdecimal::BigDecimal;

impl Decimal64 {
    /// Round half-even to `scale` fractional digits.
    ///
    /// A negative `scale` rounds to tens, hundreds and so on. NaN and the
    /// infinities are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let pi: Decimal64 = "3.14159".parse().unwrap();
    /// assert_eq!(pi.round(2).to_string(), "3.14");
    /// assert_eq!(Decimal64::from(125).round(-1).to_string(), "120");
    /// ```
    #[inline]
    pub fn round(self, scale: i32) -> Self {
        self.round_with::<BigDecimal>(scale)
    }

    /// [`Decimal64::round`] with a chosen arbitrary-precision fallback.
    pub fn round_with<B: ArbitraryPrecision>(self, scale: i32) -> Self {
        if !self.is_finite() || self.exponent() <= scale {
            return self;
        }
        let value = B::from_decimal_parts(self.mantissa(), self.exponent());
        from_arbitrary(&value.round_to_scale(i64::from(scale)))
    }
}
