// ============================================================================
// Integer Conversions
// i32/i64 in, half-even rounded i32/i64 and scaled i64 out
// ============================================================================

use crate::numeric::fast_math::{digit_count, pow_ten, shift_right_half_even};
use crate::numeric::{Decimal64, NumericError, NumericResult};

/// Most digits an i64 can always hold.
const MAX_I64_DIGITS: i64 = 18;

impl Decimal64 {
    /// Create from an integer. Values beyond 16 digits round half-even.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self::from_parts(value, 0)
    }

    /// Create from an integer. Always exact.
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        Self::from_parts(i64::from(value), 0)
    }

    /// Round half-even to an integer.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and the infinities
    /// - `Overflow` if the integer does not fit an i64
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// assert_eq!(Decimal64::from_parts(-15, 1).to_i64().unwrap(), -2);
    /// assert_eq!(Decimal64::from_parts(25, 1).to_i64().unwrap(), 2);
    /// ```
    pub fn to_i64(self) -> NumericResult<i64> {
        self.to_integer("i64")
    }

    /// Round half-even to an integer.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and the infinities
    /// - `Overflow` if the integer does not fit an i32
    pub fn to_i32(self) -> NumericResult<i32> {
        let value = self.to_integer("i32")?;
        i32::try_from(value).map_err(|_| NumericError::Overflow {
            target: "i32",
            value: self,
        })
    }

    /// Round half-even to `digits` fractional digits and return the result
    /// scaled up by `10^digits` as an integer.
    ///
    /// `digits` may be negative. Use this to hand values to fixed-point
    /// systems, e.g. `to_i64_scaled(2)` gives cents.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and the infinities
    /// - `ScaleOverflow` if the scaled integer would need more than 18 digits
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let price: Decimal64 = "12.345".parse().unwrap();
    /// assert_eq!(price.to_i64_scaled(2).unwrap(), 1234);
    /// assert_eq!(price.to_i64_scaled(5).unwrap(), 1_234_500);
    /// ```
    pub fn to_i64_scaled(self, digits: i32) -> NumericResult<i64> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite {
                target: "i64",
                value: self,
            });
        }

        let mantissa = self.mantissa();
        let width = i64::from(digit_count(mantissa));
        let diff = i64::from(digits) - i64::from(self.exponent());

        match diff {
            0 => Ok(mantissa),
            d if d < 0 => Ok(shrink(mantissa, -d, width)),
            d => {
                if width + d > MAX_I64_DIGITS {
                    return Err(NumericError::ScaleOverflow {
                        digits: (width + d).min(i64::from(i32::MAX)) as i32,
                        value: self,
                    });
                }
                Ok(mantissa * pow_ten(d as u32))
            },
        }
    }

    fn to_integer(self, target: &'static str) -> NumericResult<i64> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite {
                target,
                value: self,
            });
        }

        let mantissa = self.mantissa();
        let exponent = i64::from(self.exponent());
        if exponent >= 0 {
            return Ok(shrink(mantissa, exponent, i64::from(digit_count(mantissa))));
        }

        let grow = -exponent;
        if grow > MAX_I64_DIGITS {
            return Err(NumericError::Overflow {
                target,
                value: self,
            });
        }
        mantissa
            .checked_mul(pow_ten(grow as u32))
            .ok_or(NumericError::Overflow {
                target,
                value: self,
            })
    }
}

/// Drop `drop` low digits of a `width`-digit mantissa, half-even.
#[inline]
fn shrink(mantissa: i64, drop: i64, width: i64) -> i64 {
    if drop > width {
        // Below a tenth of a unit.
        0
    } else {
        shift_right_half_even(mantissa, drop as u32)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<i64> for Decimal64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Decimal64 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl TryFrom<Decimal64> for i64 {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal64) -> NumericResult<Self> {
        value.to_i64()
    }
}

impl TryFrom<Decimal64> for i32 {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal64) -> NumericResult<Self> {
        value.to_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn d(m: i64, e: i32) -> Decimal64 {
        Decimal64::from_parts(m, e)
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Decimal64::from(100i64), d(1, -2));
        assert_eq!(Decimal64::from(-7), d(-7, 0));
        assert_eq!(Decimal64::from(i32::MIN).to_i32().unwrap(), i32::MIN);
        assert_eq!(Decimal64::from(i64::MAX), d(9_223_372_036_854_776, -3));
    }

    #[test]
    fn test_to_i64_rounds_half_even() {
        assert_eq!(d(5, 1).to_i64().unwrap(), 0);
        assert_eq!(d(-15, 1).to_i64().unwrap(), -2);
        assert_eq!(d(-67, 1).to_i64().unwrap(), -7);
        assert_eq!(d(-95, 1).to_i64().unwrap(), -10);
        assert_eq!(d(6, 1).to_i64().unwrap(), 1);
        assert_eq!(d(1, 200).to_i64().unwrap(), 0);
        assert_eq!(d(123, -3).to_i64().unwrap(), 123_000);
    }

    #[test]
    fn test_to_i64_errors() {
        assert_eq!(
            Decimal64::NAN.to_i64(),
            Err(NumericError::NonFinite {
                target: "i64",
                value: Decimal64::NAN
            })
        );
        assert!(matches!(
            d(1, -19).to_i64(),
            Err(NumericError::Overflow { target: "i64", .. })
        ));
        assert!(matches!(
            d(10, -18).to_i64(),
            Err(NumericError::Overflow { .. })
        ));
        assert_eq!(d(9, -18).to_i64().unwrap(), 9_000_000_000_000_000_000);
    }

    #[test]
    fn test_to_i32() {
        assert_eq!(d(2147483647, 0).to_i32().unwrap(), i32::MAX);
        assert_eq!(d(21474836465, 1).to_i32().unwrap(), i32::MAX - 1);
        assert!(d(21474836475, 1).to_i32().is_err());
        assert!(matches!(
            d(2147483648, 0).to_i32(),
            Err(NumericError::Overflow { target: "i32", .. })
        ));
        assert!(matches!(
            Decimal64::INFINITY.to_i32(),
            Err(NumericError::NonFinite { target: "i32", .. })
        ));
        assert_eq!(i32::try_from(d(-25, 1)).unwrap(), -2);
    }

    #[test]
    fn test_to_i64_scaled() {
        let x = d(5159000000000001, 15);
        assert_eq!(x.to_i64_scaled(0).unwrap(), 5);
        assert_eq!(x.to_i64_scaled(1).unwrap(), 52);
        assert_eq!(x.to_i64_scaled(2).unwrap(), 516);
        assert_eq!(x.to_i64_scaled(15).unwrap(), 5159000000000001);
        assert_eq!(x.to_i64_scaled(16).unwrap(), 51590000000000010);
        assert!(matches!(
            x.to_i64_scaled(18),
            Err(NumericError::ScaleOverflow { digits: 19, .. })
        ));

        assert_eq!(d(65885, 5).to_i64_scaled(10).unwrap(), 6588500000);
        assert!(d(413, -2).to_i64_scaled(14).is_err());
    }

    #[test]
    fn test_to_i64_scaled_rounds_when_every_digit_drops() {
        assert_eq!(d(67, 2).to_i64_scaled(0).unwrap(), 1);
        assert_eq!(d(5, 1).to_i64_scaled(0).unwrap(), 0);
        assert_eq!(d(15, 2).to_i64_scaled(0).unwrap(), 0);
        assert_eq!(d(-7, 3).to_i64_scaled(1).unwrap(), 0);
        assert_eq!(d(-7, 3).to_i64_scaled(2).unwrap(), -1);
    }

    #[test]
    fn test_to_i64_scaled_negative_digits() {
        assert_eq!(d(125, 0).to_i64_scaled(-1).unwrap(), 12);
        assert_eq!(d(135, 0).to_i64_scaled(-1).unwrap(), 14);
        assert_eq!(d(1, -3).to_i64_scaled(-2).unwrap(), 10);
    }

    quickcheck! {
        fn prop_i32_round_trip(value: i32) -> bool {
            Decimal64::from(value).to_i32() == Ok(value)
        }

        fn prop_small_i64_round_trip(value: i64) -> bool {
            let value = value % 10_000_000_000_000_000;
            Decimal64::from(value).to_i64() == Ok(value)
        }
    }
}
