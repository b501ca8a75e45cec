// ============================================================================
// rust_decimal Interop
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

use crate::convert::from_arbitrary;
use crate::numeric::{Decimal64, NumericError, NumericResult};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use rust_decimal::Decimal;

/// Largest scale a `rust_decimal::Decimal` can carry.
const RUST_DECIMAL_MAX_SCALE: i32 = 28;

const RUST_DECIMAL_TARGET: &str = "rust_decimal::Decimal";

impl From<Decimal> for Decimal64 {
    /// Rounds half-even to 16 significant digits. Always finite.
    fn from(value: Decimal) -> Self {
        let mantissa = value.mantissa();
        let scale = value.scale() as i32;
        match i64::try_from(mantissa) {
            Ok(mantissa) => Decimal64::from_parts(mantissa, scale),
            Err(_) => {
                tracing::trace!(%value, "converting wide rust_decimal with arbitrary precision");
                from_arbitrary(&BigDecimal::new(BigInt::from(mantissa), i64::from(scale)))
            },
        }
    }
}

impl TryFrom<Decimal64> for Decimal {
    type Error = NumericError;

    /// Exact conversion.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and the infinities
    /// - `PrecisionLoss` if more than 28 fractional digits are significant
    /// - `Overflow` if the magnitude needs more than 96 bits
    fn try_from(value: Decimal64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite {
                target: RUST_DECIMAL_TARGET,
                value,
            });
        }

        let overflow = || NumericError::Overflow {
            target: RUST_DECIMAL_TARGET,
            value,
        };

        let mantissa = i128::from(value.mantissa());
        let exponent = value.exponent();
        if exponent > RUST_DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }
        if exponent >= 0 {
            return Decimal::try_from_i128_with_scale(mantissa, exponent as u32)
                .map_err(|_| overflow());
        }

        let scaled = 10i128
            .checked_pow(exponent.unsigned_abs())
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or_else(overflow)?;
        Decimal::try_from_i128_with_scale(scaled, 0).map_err(|_| overflow())
    }
}

impl Decimal64 {
    /// Convert to a `rust_decimal::Decimal`. See the `TryFrom` impl.
    #[inline]
    pub fn to_rust_decimal(self) -> NumericResult<Decimal> {
        Decimal::try_from(self)
    }
}
