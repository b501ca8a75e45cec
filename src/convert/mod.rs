// ============================================================================
// Conversions
// Integers, floats, arbitrary-precision decimals and rust_decimal
// ============================================================================
//
// Conversions into Decimal64 never fail: they round half-even to 16 digits
// and saturate like every other constructor. Conversions out of Decimal64
// return a NumericResult when the target cannot hold the value.

mod bignum;
mod float;
mod integer;
mod interop;
#[cfg(feature = "serde")]
mod serialization;

pub use bignum::ArbitraryPrecision;
pub(crate) use bignum::from_arbitrary;
