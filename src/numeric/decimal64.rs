// ============================================================================
// Decimal64
// 16-digit decimal floating point packed into a single i64 word
// ============================================================================

use super::layout::{self, MAX_RAW_MANTISSA};
use super::normalize::normalize;
use std::fmt;

/// Maximum number of significant decimal digits.
pub const PRECISION: u32 = 16;

/// Largest mantissa a finite value can carry (16 nines).
pub const MAX_MANTISSA: i64 = 9_999_999_999_999_999;

/// Smallest mantissa a finite value can carry.
pub const MIN_MANTISSA: i64 = -MAX_MANTISSA;

/// Largest exponent: the smallest positive value is `1e-255`.
pub const MAX_EXPONENT: i32 = 255;

/// Smallest exponent: the largest value is `9999999999999999e255`.
pub const MIN_EXPONENT: i32 = -255;

/// Exponent reserved for NaN and the infinities.
pub const SPECIAL_EXPONENT: i32 = -256;

/// Decimal number with 16 significant digits packed into an i64.
///
/// The word holds `mantissa * 10^-exponent`: a signed 55-bit mantissa in the
/// high bits and a signed 9-bit exponent in the low bits. A positive exponent
/// counts fractional digits, so `(31415, 4)` is `3.1415`.
///
/// # Canonical Form
/// Every operation produces canonical words: zero is always `(0, 0)` and a
/// nonzero mantissa never ends in a decimal zero. Two finite values are
/// therefore numerically equal exactly when their words are equal, which is
/// what `==` and `Hash` compare.
///
/// # Special Values
/// - Results too large for 16 digits at exponent -255 saturate to
///   `INFINITY` / `NEG_INFINITY`
/// - Results too small for exponent 255 flush to `ZERO`
/// - `NAN` comes from undefined operations, including division by zero
///
/// # Example
/// ```
/// use decimal64::Decimal64;
///
/// let price: Decimal64 = "101.25".parse().unwrap();
/// let qty = Decimal64::from(4);
/// assert_eq!((price * qty).to_string(), "405");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Decimal64(i64);

impl Decimal64 {
    /// Not a number.
    pub const NAN: Self = Self(layout::pack(0, SPECIAL_EXPONENT));

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(layout::pack(-MAX_RAW_MANTISSA, SPECIAL_EXPONENT));

    /// Positive infinity.
    pub const INFINITY: Self = Self(layout::pack(MAX_RAW_MANTISSA, SPECIAL_EXPONENT));

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1)
    pub const ONE: Self = Self(layout::pack(1, 0));

    /// Two (2)
    pub const TWO: Self = Self(layout::pack(2, 0));

    /// Largest finite value, `9999999999999999e255`.
    pub const MAX: Self = Self(layout::pack(MAX_MANTISSA, MIN_EXPONENT));

    /// Smallest finite value, `-9999999999999999e255`.
    pub const MIN: Self = Self(layout::pack(MIN_MANTISSA, MIN_EXPONENT));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw packed word. No validation; see [`Decimal64::validate`].
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create `mantissa * 10^-exponent`, normalized.
    ///
    /// Mantissas longer than 16 digits are rounded half-even. Exponents below
    /// -255 saturate to a signed infinity, exponents above 255 drop digits
    /// (half-even) or flush to zero.
    ///
    /// # Example
    /// ```
    /// use decimal64::Decimal64;
    ///
    /// let x = Decimal64::from_parts(31400, 1);
    /// assert_eq!((x.mantissa(), x.exponent()), (314, -1));
    /// ```
    #[inline]
    pub fn from_parts(mantissa: i64, exponent: i32) -> Self {
        Self(normalize(mantissa, exponent))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw packed word.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the signed mantissa.
    #[inline]
    pub const fn mantissa(self) -> i64 {
        layout::unpack_mantissa(self.0)
    }

    /// Get the exponent (number of fractional digits when positive).
    #[inline]
    pub const fn exponent(self) -> i32 {
        layout::unpack_exponent(self.0)
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        layout::is_finite(self.0)
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 == Self::NAN.0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == Self::INFINITY.0 || self.0 == Self::NEG_INFINITY.0
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is negative. True for `NEG_INFINITY`.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Check if value is positive. True for `INFINITY`, false for `NAN`.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0 && self.0 != Self::NAN.0
    }

    /// -1, 0 or 1 by sign. NaN yields 0.
    #[inline]
    pub const fn signum(self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Flip the sign. Works on the mantissa field alone, so it is exact for
    /// every word: NaN stays NaN and the infinities swap.
    #[inline]
    pub const fn negate(self) -> Self {
        Self(layout::with_mantissa(self.0, -self.mantissa()))
    }

    /// Absolute value. `NEG_INFINITY.abs()` is `INFINITY`.
    #[inline]
    pub const fn abs(self) -> Self {
        if self.0 < 0 {
            self.negate()
        } else {
            self
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal64 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal64({}, mantissa={}, exponent={})",
            self,
            self.mantissa(),
            self.exponent()
        )
    }
}
