// ============================================================================
// Bit Layout
// Packing of a signed mantissa and a 9-bit exponent into one i64 word
// ============================================================================
//
//   63                                   9 8          0
//  +--------------------------------------+------------+
//  |        mantissa (55 bits, signed)    |  exponent  |
//  +--------------------------------------+------------+
//
// The exponent field is two's complement and sign-extended on unpack.
// The exponent pattern 0x100 (-256) marks NaN and the infinities.

/// Number of bits holding the signed mantissa.
pub const N_MANTISSA_BITS: u32 = 55;

/// Number of bits holding the signed exponent.
pub const N_EXPONENT_BITS: u32 = 9;

const EXPONENT_MASK: i64 = (1 << N_EXPONENT_BITS) - 1;

/// Raw (unsigned) exponent field value reserved for non-finite words.
const SPECIAL_FIELD: i64 = 1 << (N_EXPONENT_BITS - 1);

/// Largest mantissa the 55-bit field can hold. Used by the infinities.
pub const MAX_RAW_MANTISSA: i64 = (1 << (N_MANTISSA_BITS - 1)) - 1;

/// Pack a mantissa and exponent into one word. No validation.
#[inline]
pub const fn pack(mantissa: i64, exponent: i32) -> i64 {
    (mantissa << N_EXPONENT_BITS) | (exponent as i64 & EXPONENT_MASK)
}

/// Extract the mantissa (arithmetic shift keeps the sign).
#[inline]
pub const fn unpack_mantissa(bits: i64) -> i64 {
    bits >> N_EXPONENT_BITS
}

/// Extract the exponent, sign-extended from 9 bits.
#[inline]
pub const fn unpack_exponent(bits: i64) -> i32 {
    const SHIFT: u32 = 32 - N_EXPONENT_BITS;
    ((bits as i32) << SHIFT) >> SHIFT
}

/// Replace the mantissa field, keeping the exponent field as is.
#[inline]
pub const fn with_mantissa(bits: i64, mantissa: i64) -> i64 {
    (mantissa << N_EXPONENT_BITS) | (bits & EXPONENT_MASK)
}

/// True unless the exponent field holds the reserved pattern.
#[inline]
pub const fn is_finite(bits: i64) -> bool {
    bits & EXPONENT_MASK != SPECIAL_FIELD
}
