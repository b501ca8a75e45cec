// ============================================================================
// Numeric Errors
// Error types for Decimal64 conversions, parsing and validation
// ============================================================================

use super::decimal64::Decimal64;
use std::fmt;

/// Errors that can occur when converting, parsing or validating a `Decimal64`.
///
/// Arithmetic never fails: overflow saturates to an infinity and underflow
/// to zero. Errors only arise at the edges, where a value has to leave the
/// 64-bit representation or enter it from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Input text is not a decimal number. Carries the offending text.
    InvalidFormat(String),
    /// A parse range reaches past the end of its input
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
    /// Value does not fit the target type
    Overflow {
        target: &'static str,
        value: Decimal64,
    },
    /// Scaling the mantissa would need more than 18 digits
    ScaleOverflow { digits: i32, value: Decimal64 },
    /// NaN or an infinity cannot be represented by the target type
    NonFinite {
        target: &'static str,
        value: Decimal64,
    },
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Destination buffer cannot hold the formatted value
    BufferTooSmall { needed: usize, available: usize },
    /// Word is not in canonical form
    NonCanonical {
        value: Decimal64,
        reason: &'static str,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat(text) => {
                write!(f, "invalid decimal format: {:?}", text)
            },
            NumericError::OutOfBounds { offset, len, size } => write!(
                f,
                "range out of bounds: offset {} + len {} exceeds input of {} bytes",
                offset, len, size
            ),
            NumericError::Overflow { target, value } => {
                write!(f, "decimal is too large to convert to {}: {}", target, value)
            },
            NumericError::ScaleOverflow { digits, value } => write!(
                f,
                "scaled value would need {} digits (max 18): {}",
                digits, value
            ),
            NumericError::NonFinite { target, value } => {
                write!(f, "cannot convert {} to {}", value, target)
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::BufferTooSmall { needed, available } => write!(
                f,
                "buffer too small: need {} bytes, have {}",
                needed, available
            ),
            NumericError::NonCanonical { value, reason } => {
                write!(f, "non-canonical decimal {}: {}", value.triplet(), reason)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidFormat("-10.zyx".to_string()).to_string(),
            "invalid decimal format: \"-10.zyx\""
        );
        assert_eq!(
            NumericError::Overflow {
                target: "i32",
                value: Decimal64::from_parts(3_000_000_000, 0),
            }
            .to_string(),
            "decimal is too large to convert to i32: 3000000000"
        );
        assert_eq!(
            NumericError::NonFinite {
                target: "i64",
                value: Decimal64::NAN,
            }
            .to_string(),
            "cannot convert NaN to i64"
        );
    }

    #[test]
    fn test_error_display_non_canonical_uses_triplet() {
        let bad = Decimal64::from_raw(10 << 9);
        let err = NumericError::NonCanonical {
            value: bad,
            reason: "mantissa has trailing zero",
        };
        assert_eq!(
            err.to_string(),
            "non-canonical decimal (5120, 10, 0): mantissa has trailing zero"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::PrecisionLoss, NumericError::PrecisionLoss);
        assert_ne!(
            NumericError::InvalidFormat("a".to_string()),
            NumericError::InvalidFormat("b".to_string())
        );
    }
}
