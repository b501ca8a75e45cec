// ============================================================================
// Arbitrary-Precision Collaborator
// Slow-path arithmetic delegated to an unbounded decimal type
// ============================================================================

use crate::numeric::{Decimal64, NumericError, NumericResult, PRECISION};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::num_traits::ToPrimitive;
use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

/// Unbounded decimal arithmetic used when the 64-bit fast paths cannot
/// produce an exact answer: multiply overflow, division, rounding to an
/// arbitrary scale, scientific-notation parsing and some float conversions.
///
/// Values are `unscaled * 10^-scale`, the same orientation as `Decimal64`.
///
/// # Implementations
/// [`BigDecimal`] is the default. Operations that need the fallback also
/// come in a `*_with::<B>` form for plugging in another type.
pub trait ArbitraryPrecision: Sized {
    /// Build `mantissa * 10^-exponent` exactly.
    fn from_decimal_parts(mantissa: i64, exponent: i32) -> Self;

    /// Round to at most `precision` significant digits (half-even) and
    /// return `(unscaled, scale)`.
    ///
    /// # Returns
    /// `None` if the rounded unscaled value does not fit an i64, which
    /// cannot happen for `precision <= 18`.
    fn to_decimal_parts(&self, precision: u32) -> Option<(i64, i64)>;

    /// Parse plain or scientific decimal text.
    fn parse_decimal(text: &str) -> Option<Self>;

    /// Exact product.
    fn mul_exact(&self, rhs: &Self) -> Self;

    /// Quotient rounded half-even to `precision` significant digits.
    /// `rhs` is never zero.
    fn div_rounded(&self, rhs: &Self, precision: u32) -> Self;

    /// Round half-even to `scale` fractional digits (negative scales round
    /// to tens, hundreds, ...).
    fn round_to_scale(&self, scale: i64) -> Self;

    /// Nearest f64, correctly rounded.
    fn approx_f64(&self) -> f64;
}

fn round_to_precision(value: &BigDecimal, precision: u32) -> BigDecimal {
    let digits = value.digits();
    let precision = u64::from(precision);
    if digits <= precision {
        return value.clone();
    }
    let (_, scale) = value.as_bigint_and_exponent();
    let excess = (digits - precision) as i64;
    value.with_scale_round(scale - excess, RoundingMode::HalfEven)
}

impl ArbitraryPrecision for BigDecimal {
    #[inline]
    fn from_decimal_parts(mantissa: i64, exponent: i32) -> Self {
        BigDecimal::new(BigInt::from(mantissa), i64::from(exponent))
    }

    fn to_decimal_parts(&self, precision: u32) -> Option<(i64, i64)> {
        let (unscaled, scale) = round_to_precision(self, precision).into_bigint_and_exponent();
        Some((unscaled.to_i64()?, scale))
    }

    fn parse_decimal(text: &str) -> Option<Self> {
        BigDecimal::from_str(text).ok()
    }

    fn mul_exact(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_rounded(&self, rhs: &Self, precision: u32) -> Self {
        // The quotient carries far more digits than requested; round once.
        round_to_precision(&(self / rhs), precision)
    }

    fn round_to_scale(&self, scale: i64) -> Self {
        self.with_scale_round(scale, RoundingMode::HalfEven)
    }

    fn approx_f64(&self) -> f64 {
        // Rust's float parser rounds correctly from any number of digits.
        let (unscaled, scale) = self.as_bigint_and_exponent();
        format!("{}e{}", unscaled, -scale)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Conversion to and from the collaborator
// ============================================================================

/// Normalize a collaborator value into a `Decimal64`, rounding to 16 digits.
pub(crate) fn from_arbitrary<B: ArbitraryPrecision>(value: &B) -> Decimal64 {
    match value.to_decimal_parts(PRECISION) {
        Some((mantissa, scale)) => Decimal64::from_parts(mantissa, clamp_scale(scale)),
        None => Decimal64::NAN,
    }
}

/// Scales beyond the i32 range are far past saturation either way.
#[inline]
fn clamp_scale(scale: i64) -> i32 {
    scale.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Decimal64 {
    /// Convert to a [`BigDecimal`] with the same value.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and the infinities.
    pub fn to_big_decimal(self) -> NumericResult<BigDecimal> {
        self.to_arbitrary()
    }

    /// Convert from a [`BigDecimal`], rounding half-even to 16 significant
    /// digits. Saturates like every other constructor.
    pub fn from_big_decimal(value: &BigDecimal) -> Self {
        from_arbitrary(value)
    }

    /// Convert to any collaborator type.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and the infinities.
    pub fn to_arbitrary<B: ArbitraryPrecision>(self) -> NumericResult<B> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite {
                target: "arbitrary-precision decimal",
                value: self,
            });
        }
        Ok(B::from_decimal_parts(self.mantissa(), self.exponent()))
    }
}

impl From<&BigDecimal> for Decimal64 {
    #[inline]
    fn from(value: &BigDecimal) -> Self {
        Self::from_big_decimal(value)
    }
}

impl From<BigDecimal> for Decimal64 {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Self::from_big_decimal(&value)
    }
}

impl TryFrom<Decimal64> for BigDecimal {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal64) -> NumericResult<Self> {
        value.to_big_decimal()
    }
}
