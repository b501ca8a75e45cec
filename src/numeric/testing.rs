// ============================================================================
// Test Strategies
// proptest generators for canonical Decimal64 values
// ============================================================================

use super::{Decimal64, MAX_EXPONENT, MAX_MANTISSA, MIN_EXPONENT, MIN_MANTISSA};
use proptest::prelude::*;

/// Any finite value over the full mantissa and exponent ranges.
pub fn finite() -> impl Strategy<Value = Decimal64> {
    (MIN_MANTISSA..=MAX_MANTISSA, MIN_EXPONENT..=MAX_EXPONENT)
        .prop_map(|(m, e)| Decimal64::from_parts(m, e))
}

/// Finite values with exponents close enough that operands overlap.
pub fn nearby() -> impl Strategy<Value = Decimal64> {
    (MIN_MANTISSA..=MAX_MANTISSA, -30i32..=30).prop_map(|(m, e)| Decimal64::from_parts(m, e))
}

/// Short mantissas, so sums and products stay exact more often.
pub fn small() -> impl Strategy<Value = Decimal64> {
    (-99_999i64..=99_999, -8i32..=8).prop_map(|(m, e)| Decimal64::from_parts(m, e))
}

/// Finite values mixed with NaN and the infinities.
pub fn any_value() -> impl Strategy<Value = Decimal64> {
    prop_oneof![
        8 => finite(),
        1 => Just(Decimal64::NAN),
        1 => Just(Decimal64::INFINITY),
        1 => Just(Decimal64::NEG_INFINITY),
        1 => Just(Decimal64::ZERO),
    ]
}
