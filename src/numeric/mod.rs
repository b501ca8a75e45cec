// ============================================================================
// Numeric Module
// Packed 64-bit decimal representation and its normalization rules
// ============================================================================
//
// This module provides:
// - Decimal64: 16-digit decimal packed into one i64 word
// - layout: pack/unpack of the mantissa and exponent fields
// - fast_math: digit counting, power-of-ten tables, half-even shifting
// - NumericError: Error types for conversions, parsing and validation
//
// Design principles:
// - One word, one value: every producing operation normalizes
// - Arithmetic saturates instead of failing (overflow -> infinity,
//   underflow -> zero); only conversions return Result
// - No arbitrary-precision arithmetic on the fast paths

mod decimal64;
mod errors;
pub mod fast_math;
pub mod layout;
mod normalize;
mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use decimal64::{
    Decimal64, MAX_EXPONENT, MAX_MANTISSA, MIN_EXPONENT, MIN_MANTISSA, PRECISION,
    SPECIAL_EXPONENT,
};
pub use errors::{NumericError, NumericResult};
pub use layout::{N_EXPONENT_BITS, N_MANTISSA_BITS};
