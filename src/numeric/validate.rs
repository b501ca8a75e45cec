// ============================================================================
// Debug Surface
// Raw-part diagnostics and canonical-form validation
// ============================================================================

use super::decimal64::{Decimal64, MAX_MANTISSA, SPECIAL_EXPONENT};
use super::errors::{NumericError, NumericResult};
use super::layout::MAX_RAW_MANTISSA;

impl Decimal64 {
    /// `"(mantissa, exponent)"`, straight from the word.
    pub fn tuple(self) -> String {
        format!("({}, {})", self.mantissa(), self.exponent())
    }

    /// `"(raw, mantissa, exponent)"`, straight from the word.
    pub fn triplet(self) -> String {
        format!("({}, {}, {})", self.raw_value(), self.mantissa(), self.exponent())
    }

    /// Check that the word is canonical. NaN and the infinities pass.
    ///
    /// Useful on words built with [`Decimal64::from_raw`]: every arithmetic
    /// result already satisfies it.
    ///
    /// # Errors
    /// Returns `NonCanonical` with the violated rule.
    pub fn validate(self) -> NumericResult<()> {
        let mantissa = self.mantissa();
        let exponent = self.exponent();

        if exponent == SPECIAL_EXPONENT {
            return match mantissa {
                0 | MAX_RAW_MANTISSA => Ok(()),
                m if m == -MAX_RAW_MANTISSA => Ok(()),
                _ => Err(self.non_canonical("reserved exponent with an unknown mantissa")),
            };
        }
        if mantissa == 0 {
            return if exponent == 0 {
                Ok(())
            } else {
                Err(self.non_canonical("zero with a nonzero exponent"))
            };
        }
        if !(-MAX_MANTISSA..=MAX_MANTISSA).contains(&mantissa) {
            return Err(self.non_canonical("mantissa exceeds 16 digits"));
        }
        if mantissa % 10 == 0 {
            return Err(self.non_canonical("mantissa has trailing zero"));
        }
        Ok(())
    }

    /// Like [`Decimal64::validate`], but NaN and the infinities fail too.
    ///
    /// # Errors
    /// Returns `NonCanonical` for non-canonical or non-finite words.
    pub fn validate_finite(self) -> NumericResult<()> {
        if !self.is_finite() {
            return Err(self.non_canonical("value is not finite"));
        }
        self.validate()
    }

    fn non_canonical(self, reason: &'static str) -> NumericError {
        NumericError::NonCanonical {
            value: self,
            reason,
        }
    }
}
